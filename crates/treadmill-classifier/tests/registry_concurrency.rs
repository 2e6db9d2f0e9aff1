//! Concurrency tests for the action registry.

use std::sync::Arc;
use std::thread;

use treadmill_classifier::ActionRegistry;

#[test]
fn concurrent_registration_and_lookup() {
    let registry = Arc::new(ActionRegistry::<u64>::default());
    let mut handles = Vec::new();

    for worker in 0..4u64 {
        let registry = Arc::clone(&registry);
        handles.push(thread::spawn(move || {
            for i in 0..250u64 {
                let handle = worker * 1000 + i;
                let name = if i % 2 == 0 { "LocomotionMove" } else { "Jump" };
                let is_movement = registry.register(handle, name);
                if registry.is_movement(&handle) != is_movement {
                    return false;
                }
            }
            true
        }));
    }

    for handle in handles {
        let joined = handle.join();
        assert!(matches!(joined, Ok(true)), "worker observed an inconsistent entry");
    }
    assert_eq!(registry.len(), 1000);
}
