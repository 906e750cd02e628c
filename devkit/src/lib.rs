/*!
# Hotel DevKit - test doubles and harness

Helpers for exercising the hotel without a terminal or a real data file:
- Scripted payment gate that records every offer
- Store whose saves always fail
- Harness owning a temporary reservation file
*/

pub mod gate_stub;
pub mod store_stub;
pub mod test_utils;

pub use gate_stub::ScriptedGate;
pub use store_stub::FailingStore;
pub use test_utils::TestHarness;
