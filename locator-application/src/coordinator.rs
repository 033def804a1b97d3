use super::*;
use crate::{error::AppError, settings::CoordinatorSettings, snapshot::Snapshot};
use gateways::{geocode::ReverseGeocoder, notify::NotificationGateway, position::*};
use std::sync::Arc;
use tokio::{sync::watch, task::JoinHandle};

/// Acquires the current position of the device and
/// resolves its address.
///
/// The coordinator owns the coordinate and address state.
/// Clones share the same state.
#[derive(Clone)]
pub struct LocationCoordinator {
    inner: Arc<Inner>,
}

struct Inner {
    state: watch::Sender<Snapshot>,
    position: Arc<dyn PositionProvider>,
    geocoder: Arc<dyn ReverseGeocoder>,
    notify: Arc<dyn NotificationGateway>,
    settings: CoordinatorSettings,
}

impl LocationCoordinator {
    /// Create a coordinator without touching any gateway.
    ///
    /// Use [`start`](Self::start) to bootstrap the location
    /// on construction.
    pub fn new<P, G, N>(position: P, geocoder: G, notify: N, settings: CoordinatorSettings) -> Self
    where
        P: PositionProvider + 'static,
        G: ReverseGeocoder + 'static,
        N: NotificationGateway + 'static,
    {
        let (state, _) = watch::channel(Snapshot::new(settings.region_span));
        Self {
            inner: Arc::new(Inner {
                state,
                position: Arc::new(position),
                geocoder: Arc::new(geocoder),
                notify: Arc::new(notify),
                settings,
            }),
        }
    }

    /// Create a coordinator and bootstrap the location
    /// and its address in the background.
    pub fn start<P, G, N>(
        position: P,
        geocoder: G,
        notify: N,
        settings: CoordinatorSettings,
    ) -> (Self, JoinHandle<()>)
    where
        P: PositionProvider + 'static,
        G: ReverseGeocoder + 'static,
        N: NotificationGateway + 'static,
    {
        let coordinator = Self::new(position, geocoder, notify, settings);
        let bootstrap = coordinator.spawn_bootstrap();
        (coordinator, bootstrap)
    }

    pub fn snapshot(&self) -> Snapshot {
        self.inner.state.borrow().clone()
    }

    /// Get notified about every state change.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.inner.state.subscribe()
    }

    /// Acquire the location and resolve its address once
    /// in the background.
    pub fn spawn_bootstrap(&self) -> JoinHandle<()> {
        let coordinator = self.clone();
        tokio::spawn(async move { coordinator.bootstrap().await })
    }

    pub async fn bootstrap(&self) {
        log::debug!("Bootstrapping location");
        if self.acquire_location().await.is_err() {
            return;
        }
        if let Err(err) = self.resolve_address().await {
            log::debug!("Bootstrapping the address failed: {err}");
        }
    }

    /// Request a new fix from the position provider.
    ///
    /// A request that is issued while another one is in flight
    /// does not invoke the provider again but waits for the
    /// result of the pending request.
    pub async fn acquire_location(&self) -> Result<Coordinate> {
        let mut started = false;
        self.inner.state.send_if_modified(|state| {
            if state.locating.is_in_flight() {
                return false;
            }
            state.locating = LocatingStatus::InFlight;
            started = true;
            true
        });
        if !started {
            log::debug!("Joining the pending location request");
            return self.pending_location().await;
        }

        let guard = StateGuard::new(&self.inner.state, |state: &mut Snapshot| {
            state.coordinate = None;
            state.locating = LocatingStatus::Failed(LocatingErrorKind::Cancelled);
        });
        let result = self
            .inner
            .position
            .current_position(&self.inner.settings.position_options)
            .await;
        guard.disarm();

        let result = result.and_then(|pos| {
            usecases::accept_position(pos).map_err(|err| {
                PositionError::other(
                    "INVALID_POSITION",
                    format!("{err}: {},{}", pos.latitude, pos.longitude),
                )
            })
        });
        match result {
            Ok(coordinate) => {
                log::info!("Acquired location {coordinate}");
                self.inner.state.send_modify(|state| {
                    state.coordinate = Some(coordinate);
                    state.locating = LocatingStatus::Succeeded;
                });
                Ok(coordinate)
            }
            Err(err) => {
                log::warn!("{} {}", err.code, err.message);
                let kind = usecases::classify_position_error(&err);
                self.inner.state.send_modify(|state| {
                    state.coordinate = None;
                    state.locating = LocatingStatus::Failed(kind);
                });
                self.inner
                    .notify
                    .notify(usecases::locating_failure_notification(kind, &err.message));
                Err(AppError::Locating(kind))
            }
        }
    }

    async fn pending_location(&self) -> Result<Coordinate> {
        let mut rx = self.inner.state.subscribe();
        let state = rx
            .wait_for(|state| !state.locating.is_in_flight())
            .await
            .map_err(|_| AppError::Locating(LocatingErrorKind::Cancelled))?;
        match (state.locating, state.coordinate) {
            (LocatingStatus::Succeeded, Some(coordinate)) => Ok(coordinate),
            (LocatingStatus::Failed(kind), _) => Err(AppError::Locating(kind)),
            _ => Err(AppError::Locating(LocatingErrorKind::Unknown)),
        }
    }

    /// Resolve the address of the current coordinate.
    ///
    /// The result is discarded if the coordinate has changed
    /// in the meantime or if a newer request has been issued.
    pub async fn resolve_address(&self) -> Result<Address> {
        let mut request = None;
        self.inner.state.send_modify(|state| match state.coordinate {
            Some(coordinate) => {
                state.geocoding_ticket += 1;
                state.geocoding = GeocodingStatus::InFlight;
                request = Some((coordinate, state.geocoding_ticket));
            }
            None => {
                state.geocoding_ticket += 1;
                state.geocoding = GeocodingStatus::Failed(GeocodingErrorKind::NoCoordinate);
            }
        });
        let Some((coordinate, ticket)) = request else {
            log::debug!("Cannot resolve an address without a coordinate");
            return Err(usecases::Error::NoCoordinate.into());
        };

        let guard = StateGuard::new(&self.inner.state, move |state: &mut Snapshot| {
            if state.geocoding_ticket == ticket {
                state.geocoding = GeocodingStatus::Idle;
            }
        });
        let result = self.inner.geocoder.geocode_position(coordinate).await;
        guard.disarm();

        let result = result
            .map_err(AppError::from)
            .and_then(|results| Ok(usecases::first_formatted_address(results)?));

        let mut superseded = false;
        let mut outdated = false;
        self.inner.state.send_modify(|state| {
            if state.geocoding_ticket != ticket {
                superseded = true;
                return;
            }
            if state.coordinate != Some(coordinate) {
                outdated = true;
                state.geocoding = GeocodingStatus::Idle;
                return;
            }
            match &result {
                Ok(address) => {
                    state.address = address.clone();
                    state.address_coordinate = Some(coordinate);
                    state.geocoding = GeocodingStatus::Succeeded;
                }
                Err(_) => {
                    state.geocoding = GeocodingStatus::Failed(GeocodingErrorKind::Unknown);
                }
            }
        });
        if superseded {
            log::info!("Discarding address of {coordinate} superseded by a newer request");
            return Err(AppError::StaleAddress);
        }
        if outdated {
            log::info!("Discarding address resolved for outdated coordinate {coordinate}");
            return Err(AppError::StaleAddress);
        }
        match result {
            Ok(address) => {
                log::info!("Resolved address of {coordinate}: {address}");
                Ok(address)
            }
            Err(err) => {
                log::warn!("Failed to resolve address of {coordinate}: {err}");
                self.inner
                    .notify
                    .notify(usecases::geocoding_failure_notification(&err.to_string()));
                Err(err)
            }
        }
    }

    /// Acquire the location again while keeping the refreshing
    /// flag set for at least the configured minimum delay.
    pub async fn refresh(&self) -> Result<Coordinate> {
        self.inner.state.send_modify(|state| state.refreshing += 1);
        let _guard = StateGuard::new(&self.inner.state, |state: &mut Snapshot| {
            state.refreshing = state.refreshing.saturating_sub(1);
        });
        let (_, result) = tokio::join!(
            tokio::time::sleep(self.inner.settings.refresh_min_delay),
            self.acquire_location()
        );
        result
    }
}

/// Applies a state update when dropped unless it has been disarmed.
struct StateGuard<'a, F>
where
    F: FnOnce(&mut Snapshot),
{
    state: &'a watch::Sender<Snapshot>,
    on_drop: Option<F>,
}

impl<'a, F> StateGuard<'a, F>
where
    F: FnOnce(&mut Snapshot),
{
    fn new(state: &'a watch::Sender<Snapshot>, on_drop: F) -> Self {
        Self {
            state,
            on_drop: Some(on_drop),
        }
    }

    fn disarm(mut self) {
        self.on_drop = None;
    }
}

impl<F> Drop for StateGuard<'_, F>
where
    F: FnOnce(&mut Snapshot),
{
    fn drop(&mut self) {
        if let Some(update) = self.on_drop.take() {
            self.state.send_modify(update);
        }
    }
}
