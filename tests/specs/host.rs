//! Extension host specs
//!
//! Verify the control surface comes up through extension registration.

use crate::prelude::*;
use sr_adapters::ExtensionHost;
use sr_control::ControlExtension;

#[tokio::test]
async fn registered_control_drives_the_engine() {
    let engine = FakeEngine::new();
    let extension = ControlExtension::new(ControlConfig::default());
    let mut host = ExtensionHost::new();
    host.add(extension.clone());

    assert!(host.register_all(&engine).is_empty());

    let control = extension.control().unwrap();
    control.stop(true).await.unwrap();
    assert!(engine.has_exited());
    // Headless by default, so the user is never prompted
    similar_asserts::assert_eq!(
        engine.calls(),
        vec![EngineCall::ExitSuite { prompt_user: false }]
    );
}
