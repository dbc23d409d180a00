#![no_main]

use libfuzzer_sys::fuzz_target;
use modfx_spec::{CornerPolicy, FlangerConfig, RandModSigConfig, StretchConfig};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Parsing and validation must never panic.
    if let Ok(config) = FlangerConfig::from_json(text) {
        assert!(serde_json::to_string(&config).is_ok());
    }

    if let Ok(config) = serde_json::from_str::<RandModSigConfig>(text) {
        let _ = config.validate();
    }
    if let Ok(policy) = serde_json::from_str::<CornerPolicy>(text) {
        let _ = policy.validate();
    }
    if let Ok(config) = serde_json::from_str::<StretchConfig>(text) {
        let _ = config.validate();
    }
});
