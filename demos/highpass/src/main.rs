//! Resono high-pass demo - binding a Butterworth-style filter unit.
//!
//! This demo shows how a node type is written against the framework:
//! 1. Declare a component code and a descriptor list at type level
//! 2. Build a `ParameterSet` from the descriptors at construction time
//! 3. Drive values and ramps through the handles; the engine (here a
//!    printing stub) receives the clamped, address-keyed calls

use resono::prelude::*;
use std::sync::Arc;

/// Engine stub that prints every call it receives.
///
/// A real host would hand the node a handle into the native engine instead.
struct PrintEngine;

impl DspEngine for PrintEngine {
    fn set_parameter(&self, address: ParameterAddress, value: ParamValue) {
        println!("engine: set   addr={address:#04x} value={value}");
    }

    fn ramp_parameter(&self, address: ParameterAddress, target: ParamValue, duration_seconds: f32) {
        println!("engine: ramp  addr={address:#04x} target={target} over {duration_seconds}s");
    }

    fn parameter_address(&self, identifier: &str) -> Option<ParameterAddress> {
        match identifier {
            "cutoff" => Some(0x01),
            _ => None,
        }
    }
}

/// Second-order Butterworth high-pass binding.
struct HighPassFilter {
    params: ParameterSet,
}

impl HighPassFilter {
    /// Component code of the native processing unit this node wraps.
    const COMPONENT: ComponentCode = ComponentCode::new(b"bthp");

    fn new(engine: Arc<dyn DspEngine>) -> ParameterResult<Self> {
        let cutoff_address = engine.parameter_address("cutoff").unwrap_or_default();
        let defs = vec![
            ParameterDef::new("cutoff", "Cutoff Frequency", cutoff_address, 500.0, 12.0..=20_000.0)?
                .with_unit(ParameterUnit::Hertz),
        ];
        Ok(Self { params: ParameterSet::from_defs(defs, &engine) })
    }
}

impl HasParameters for HighPassFilter {
    fn parameters(&self) -> &ParameterSet {
        &self.params
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let engine: Arc<dyn DspEngine> = Arc::new(PrintEngine);
    let filter = HighPassFilter::new(engine)?;

    println!("node component: {}", HighPassFilter::COMPONENT);
    for param in filter.parameters() {
        let def = param.def();
        println!(
            "param {:?} ({}) default={}{} range=[{}, {}]",
            def.identifier(),
            def.name(),
            def.default_value(),
            def.unit().label(),
            def.min(),
            def.max(),
        );
    }

    let cutoff = filter.parameters().by_identifier("cutoff").expect("declared above");
    cutoff.set(1_000.0);
    cutoff.set(-5.0); // clamps to the lower bound
    cutoff.ramp(8_000.0, 2.5)?;
    println!("cutoff now {} Hz", cutoff.value());

    Ok(())
}
