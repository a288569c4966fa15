//! Kinds command: lists the trade kinds with a registered handler.

use pricer_pricing::TradeRegistry;

use crate::Result;

/// Run the kinds command
pub fn run(registry: &TradeRegistry) -> Result<()> {
    for name in registry.registered_kinds() {
        println!("{}", name);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runs_on_empty_registry() {
        assert!(run(&TradeRegistry::new()).is_ok());
    }
}
