//! Test helpers.

use std::sync::Arc;

use crate::notify::MockNotifier;

/// Notifier mock that accepts any notification.
///
/// Tests asserting on specific notifications build their own strict mock.
pub(crate) fn relaxed_notifier() -> Arc<MockNotifier> {
    let mut notifier = MockNotifier::new();
    notifier.expect_notify().returning(|_, _, _| {});

    Arc::new(notifier)
}
