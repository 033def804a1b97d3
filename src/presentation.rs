use locator_application::prelude::Snapshot;
use locator_core::{
    gateways::notify::{Notification, NotificationGateway},
    status::{GeocodingStatus, LocatingStatus},
};
use locator_gateways::platform::DesktopPlatform;
use tokio::sync::watch;

/// Prints alerts to the terminal.
pub struct TerminalAlerts {
    open_settings: bool,
    platform: DesktopPlatform,
}

impl TerminalAlerts {
    pub const fn new(open_settings: bool) -> Self {
        Self {
            open_settings,
            platform: DesktopPlatform,
        }
    }
}

impl NotificationGateway for TerminalAlerts {
    fn notify(&self, notification: Notification) {
        eprintln!("{}", alert_text(&notification));
        match notification.remediation {
            Some(remediation) if self.open_settings => remediation.apply(&self.platform),
            Some(_) => log::info!("Run with --open-settings to get help with the system settings"),
            None => {}
        }
    }
}

fn alert_text(notification: &Notification) -> String {
    format!("[{}] {}", notification.title, notification.message)
}

/// Print a status line whenever the visible state changes.
pub async fn render_changes(mut snapshots: watch::Receiver<Snapshot>) {
    let mut last_line = None;
    loop {
        let line = status_line(&snapshots.borrow_and_update());
        if last_line.as_ref() != Some(&line) {
            println!("{line}");
            last_line = Some(line);
        }
        if snapshots.changed().await.is_err() {
            break;
        }
    }
}

pub fn status_line(snapshot: &Snapshot) -> String {
    let mut line = String::from("Location: ");
    match (snapshot.coordinate(), snapshot.locating()) {
        (Some(coordinate), _) => line.push_str(&coordinate.to_string()),
        (None, LocatingStatus::Failed(kind)) => line.push_str(&format!("failed ({kind})")),
        (None, _) => line.push_str("unknown"),
    }
    if snapshot.locating().is_in_flight() {
        line.push_str(" (locating...)");
    }

    line.push_str(" | Address: ");
    let address = snapshot.address();
    if address.is_empty() {
        line.push('-');
    } else {
        line.push_str(address.as_str());
        if snapshot.is_address_stale() {
            line.push_str(" (outdated)");
        }
    }
    if snapshot.geocoding() == GeocodingStatus::InFlight {
        line.push_str(" (resolving...)");
    }

    if let Some(region) = snapshot.region() {
        let ((south, west), (north, east)) = region.bounds();
        line.push_str(&format!(
            " | Map: {south:.5},{west:.5} .. {north:.5},{east:.5}"
        ));
    }
    if snapshot.is_refreshing() {
        line.push_str(" [refreshing]");
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use locator_application::prelude::{CoordinatorSettings, LocationCoordinator};
    use locator_core::{
        entities::Coordinate,
        gateways::{
            geocode::{GeocodeError, GeocodedAddress, ReverseGeocoder},
            notify::Remediation,
        },
    };
    use locator_gateways::fixed_position::FixedPosition;

    struct Berlin;

    #[async_trait]
    impl ReverseGeocoder for Berlin {
        async fn geocode_position(
            &self,
            _: Coordinate,
        ) -> Result<Vec<GeocodedAddress>, GeocodeError> {
            Ok(vec![GeocodedAddress {
                formatted_address: "Unter den Linden, Berlin".into(),
            }])
        }
    }

    #[test]
    fn render_initial_state() {
        assert_eq!(
            "Location: unknown | Address: -",
            status_line(&Snapshot::default())
        );
    }

    #[tokio::test]
    async fn render_location_and_address() {
        let coordinator = LocationCoordinator::new(
            FixedPosition::new(52.52, 13.405),
            Berlin,
            TerminalAlerts::new(false),
            CoordinatorSettings::default(),
        );
        coordinator.bootstrap().await;
        assert_eq!(
            "Location: 52.52,13.405 | Address: Unter den Linden, Berlin \
             | Map: 52.51725,13.40225 .. 52.52275,13.40775",
            status_line(&coordinator.snapshot())
        );
    }

    #[test]
    fn format_alert() {
        let notification = Notification {
            title: "Error!!".into(),
            message: "No address found".into(),
            remediation: Some(Remediation::OpenLocationSettings),
        };
        assert_eq!("[Error!!] No address found", alert_text(&notification));
    }
}
