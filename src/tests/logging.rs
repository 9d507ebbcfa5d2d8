#[cfg(test)]
mod logging {
    use crate::prelude::*;
    use log::{Level, LevelFilter, Log, Metadata, Record};
    use std::{
        sync::{Mutex, Once},
        thread::{self, ThreadId},
    };

    /*
     * Records every trace, tagged with the emitting thread,
     * so concurrent tests do not see each other's traces.
     */
    struct Recorder {
        records: Mutex<Vec<(ThreadId, Level, String)>>,
    }

    impl Log for Recorder {
        fn enabled(&self, _: &Metadata) -> bool {
            true
        }
        fn log(&self, record: &Record) {
            if let Ok(mut records) = self.records.lock() {
                records.push((thread::current().id(), record.level(), record.args().to_string()));
            }
        }
        fn flush(&self) {}
    }

    static RECORDER: Recorder = Recorder {
        records: Mutex::new(Vec::new()),
    };

    static INIT: Once = Once::new();

    /*
     * Runs given batch, returns the ERROR traces it emitted
     */
    fn error_traces<T>(batch: impl FnOnce() -> Result<T, Error>) -> (Result<T, Error>, Vec<String>) {
        INIT.call_once(|| {
            log::set_logger(&RECORDER).unwrap();
            log::set_max_level(LevelFilter::Trace);
        });

        let id = thread::current().id();
        let take = || {
            let mut records = RECORDER.records.lock().unwrap();
            let (mine, others): (Vec<_>, Vec<_>) =
                records.drain(..).partition(|(thread, _, _)| *thread == id);
            *records = others;
            mine.into_iter()
                .filter(|(_, level, _)| *level == Level::Error)
                .map(|(_, _, msg)| msg)
                .collect::<Vec<_>>()
        };

        let _ = take();
        let result = batch();
        (result, take())
    }

    #[test]
    fn rejected_batches_are_traced() {
        let (result, traces) =
            error_traces(|| convert_batch(&Ellipsoid::WGS84, &[0.0; 2], &[0.0; 2], &[0.0; 1], &mut [0.0; 6], 2));
        assert!(result.is_err());
        assert_eq!(traces.len(), 1);
        assert!(traces[0].contains("elevation"));

        let (result, traces) = error_traces(|| {
            convert_batch_into(&Ellipsoid::WGS84, &[0.0; 2], &[0.0; 2], &[0.0; 3], &mut [[0.0; 3]; 2])
        });
        assert_eq!(result, Err(Error::SizeMismatch("latitude", "elevation")));
        assert_eq!(traces.len(), 1);
        assert!(traces[0].contains("elevation"));

        let (result, traces) =
            error_traces(|| convert_batch(&Ellipsoid::WGS84, &[], &[], &[], &mut [], isize::MAX));
        assert!(matches!(result, Err(Error::CountOverflow(_))));
        assert_eq!(traces.len(), 1);
    }

    #[test]
    fn rejected_conversions_are_traced() {
        let converter = Converter::wgs84();

        let (result, traces) = error_traces(|| converter.ecef_to_geodetic(&[0.0; 4]));
        assert_eq!(result, Err(Error::NotInterleaved(4)));
        assert_eq!(traces.len(), 1);

        let (result, traces) =
            error_traces(|| converter.ecef_to_horizontal(&[0.0; 2], &[0.0; 2], &[1.0; 9]));
        assert_eq!(result, Err(Error::SizeMismatch("latitude", "direction")));
        assert_eq!(traces.len(), 1);
        assert!(traces[0].contains("direction"));

        let (result, traces) = error_traces(|| {
            converter.ecef_from_horizontal(&[0.0; 2], &[0.0; 1], &[0.0; 2], &[0.0; 2])
        });
        assert_eq!(result, Err(Error::SizeMismatch("latitude", "longitude")));
        assert_eq!(traces.len(), 1);
    }

    #[test]
    fn accepted_batches_are_not_traced() {
        let (result, traces) =
            error_traces(|| convert_batch(&Ellipsoid::WGS84, &[0.0], &[0.0], &[0.0], &mut [0.0; 3], 1));
        assert!(result.is_ok());
        assert!(traces.is_empty());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn rejected_parallel_batches_are_traced() {
        let (result, traces) = error_traces(|| {
            par_convert_batch_into(&Ellipsoid::WGS84, &[0.0; 2], &[0.0; 1], &[0.0; 2], &mut [[0.0; 3]; 2])
        });
        assert_eq!(result, Err(Error::SizeMismatch("latitude", "longitude")));
        assert_eq!(traces.len(), 1);
    }
}
