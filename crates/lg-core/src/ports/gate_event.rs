use async_trait::async_trait;

use crate::gate::GateSnapshot;

/// Pushes gate changes to the presentation surface.
#[async_trait]
pub trait GateEventPort: Send + Sync {
    async fn emit_gate_changed(&self, snapshot: GateSnapshot);
}
