//! Timer driver for fade-out transitions
//!
//! The controller never sleeps; it only reports its next deadline. This
//! drives those deadlines with tokio timers until nothing is pending.

use crate::controller::CatalogController;
use shelf_storage::KeyValueStore;
use shelf_view::ElementId;

/// Wait out every pending fade and return the items that left layout
pub async fn settle_transitions<S: KeyValueStore>(
    controller: &mut CatalogController<S>,
) -> Vec<ElementId> {
    let mut hidden = Vec::new();
    while let Some(deadline) = controller.next_deadline() {
        tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await;
        // Advance to the deadline itself: it has passed, whatever the clock says.
        hidden.extend(controller.advance(deadline));
    }
    hidden
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{InitialPage, ShelfConfig};
    use shelf_storage::MemoryStore;
    use shelf_view::FilterControls;

    const PAGE: &str = concat!(
        r#"<article class="product-item"><h3>Pen</h3><p class="price">5.000</p></article>"#,
        r#"<article class="product-item"><h3>Lamp</h3><p class="price">90.000</p></article>"#,
    );

    #[tokio::test(start_paused = true)]
    async fn settles_after_fade_delay() {
        let start = tokio::time::Instant::now();
        let mut controller = CatalogController::initialize(
            ShelfConfig::default(),
            MemoryStore::new(),
            InitialPage::new(PAGE).with_controls(FilterControls::with_keyword("pen")),
            start.into_std(),
        );
        assert!(controller.next_deadline().is_some());

        let hidden = settle_transitions(&mut controller).await;

        assert_eq!(hidden.len(), 1);
        assert_eq!(controller.next_deadline(), None);
        assert!(start.elapsed() >= controller.config().fade_out());
    }

    #[tokio::test(start_paused = true)]
    async fn nothing_pending_returns_immediately() {
        let mut controller = CatalogController::initialize(
            ShelfConfig::default(),
            MemoryStore::new(),
            InitialPage::new(PAGE),
            tokio::time::Instant::now().into_std(),
        );
        assert!(settle_transitions(&mut controller).await.is_empty());
    }
}
