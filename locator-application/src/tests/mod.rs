pub mod prelude {

    use async_trait::async_trait;
    use std::{
        collections::VecDeque,
        sync::{
            atomic::{AtomicUsize, Ordering},
            Arc, Mutex,
        },
    };
    use tokio::sync::Semaphore;

    pub use crate::{
        gateways::{geocode::*, notify::*, position::*},
        prelude::*,
    };
    pub use locator_core::{entities::*, status::*, usecases};

    pub fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    pub fn coordinate(lat: f64, lng: f64) -> Coordinate {
        Coordinate::try_from_lat_lng_deg(lat, lng).unwrap()
    }

    pub fn position(lat: f64, lng: f64) -> Position {
        Position {
            latitude: lat,
            longitude: lng,
        }
    }

    pub fn geocoded(addr: &str) -> GeocodedAddress {
        GeocodedAddress {
            formatted_address: addr.into(),
        }
    }

    /// Blocks calls until they are released.
    #[derive(Clone)]
    pub struct Gate(Option<Arc<Semaphore>>);

    impl Gate {
        pub fn open() -> Self {
            Self(None)
        }

        pub fn closed() -> Self {
            Self(Some(Arc::new(Semaphore::new(0))))
        }

        pub fn release_one(&self) {
            if let Some(sem) = &self.0 {
                sem.add_permits(1);
            }
        }

        async fn pass(&self) {
            if let Some(sem) = &self.0 {
                sem.acquire().await.unwrap().forget();
            }
        }
    }

    #[derive(Clone)]
    pub struct FakePositionProvider {
        results: Arc<Mutex<VecDeque<Result<Position, PositionError>>>>,
        calls: Arc<AtomicUsize>,
        options: Arc<Mutex<Vec<PositionOptions>>>,
        gate: Gate,
    }

    impl FakePositionProvider {
        pub fn new(gate: Gate) -> Self {
            Self {
                results: Default::default(),
                calls: Default::default(),
                options: Default::default(),
                gate,
            }
        }

        pub fn push(&self, result: Result<Position, PositionError>) -> &Self {
            self.results.lock().unwrap().push_back(result);
            self
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        pub fn requested_options(&self) -> Vec<PositionOptions> {
            self.options.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PositionProvider for FakePositionProvider {
        async fn current_position(
            &self,
            options: &PositionOptions,
        ) -> Result<Position, PositionError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.options.lock().unwrap().push(options.clone());
            self.gate.pass().await;
            self.results
                .lock()
                .unwrap()
                .pop_front()
                .expect("No position result left")
        }
    }

    pub type GeocodingResult = Result<Vec<GeocodedAddress>, GeocodeError>;

    #[derive(Clone)]
    pub struct FakeGeocoder {
        results: Arc<Mutex<VecDeque<(GeocodingResult, Gate)>>>,
        requests: Arc<Mutex<Vec<Coordinate>>>,
        gate: Gate,
    }

    impl FakeGeocoder {
        pub fn new(gate: Gate) -> Self {
            Self {
                results: Default::default(),
                requests: Default::default(),
                gate,
            }
        }

        pub fn push(&self, result: GeocodingResult) -> &Self {
            self.push_gated(result, self.gate.clone())
        }

        /// The request that receives this result waits for its own gate.
        pub fn push_gated(&self, result: GeocodingResult, gate: Gate) -> &Self {
            self.results.lock().unwrap().push_back((result, gate));
            self
        }

        pub fn requests(&self) -> Vec<Coordinate> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ReverseGeocoder for FakeGeocoder {
        async fn geocode_position(
            &self,
            pos: Coordinate,
        ) -> Result<Vec<GeocodedAddress>, GeocodeError> {
            self.requests.lock().unwrap().push(pos);
            let (result, gate) = self
                .results
                .lock()
                .unwrap()
                .pop_front()
                .expect("No geocoding result left");
            gate.pass().await;
            result
        }
    }

    #[derive(Clone, Default)]
    pub struct RecordingNotifier(Arc<Mutex<Vec<Notification>>>);

    impl RecordingNotifier {
        pub fn notifications(&self) -> Vec<Notification> {
            self.0.lock().unwrap().clone()
        }
    }

    impl NotificationGateway for RecordingNotifier {
        fn notify(&self, notification: Notification) {
            self.0.lock().unwrap().push(notification);
        }
    }

    pub struct Fixture {
        pub position: FakePositionProvider,
        pub geocoder: FakeGeocoder,
        pub notify: RecordingNotifier,
        pub coordinator: LocationCoordinator,
    }

    impl Fixture {
        pub fn new() -> Self {
            Self::with_gates(Gate::open(), Gate::open())
        }

        pub fn with_gates(position_gate: Gate, geocoder_gate: Gate) -> Self {
            init_logging();
            let position = FakePositionProvider::new(position_gate);
            let geocoder = FakeGeocoder::new(geocoder_gate);
            let notify = RecordingNotifier::default();
            let coordinator = LocationCoordinator::new(
                position.clone(),
                geocoder.clone(),
                notify.clone(),
                CoordinatorSettings::default(),
            );
            Self {
                position,
                geocoder,
                notify,
                coordinator,
            }
        }
    }
}
