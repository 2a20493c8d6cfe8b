use super::*;
use crate::language::LanguageRegistry;

#[test]
fn counter_integration_with_registry() {
    let registry = LanguageRegistry::default();
    let counter = SlocCounter::new(registry.prefixes_for(".rs"));

    let source = "fn main() {\n    // comment\n\n    println!(\"hello\");\n}\n";
    let stats = counter.count(source);

    assert_eq!(stats.total, 5);
    assert_eq!(stats.code, 3);
    assert_eq!(stats.comment, 1);
    assert_eq!(stats.blank, 1);
}
