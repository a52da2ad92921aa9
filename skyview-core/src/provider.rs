use crate::{FetchError, Snapshot};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openmeteo;

pub use openmeteo::OpenMeteoClient;

/// Something that can produce one weather snapshot per call.
///
/// Each call is independent: no caching, no retries. Callers that start overlapping fetches
/// get no ordering guarantee between them.
#[async_trait]
pub trait ForecastSource: Send + Sync + Debug {
    async fn fetch(&self) -> Result<Snapshot, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CurrentReading;

    #[derive(Debug)]
    struct Fixed;

    #[async_trait]
    impl ForecastSource for Fixed {
        async fn fetch(&self) -> Result<Snapshot, FetchError> {
            Ok(Snapshot { current: CurrentReading::from_celsius(3.0), forecast: vec![] })
        }
    }

    #[tokio::test]
    async fn trait_objects_are_usable() {
        let source: Box<dyn ForecastSource> = Box::new(Fixed);
        let snapshot = source.fetch().await.unwrap();
        assert_eq!(snapshot.current.temperature_c, 3);
    }
}
