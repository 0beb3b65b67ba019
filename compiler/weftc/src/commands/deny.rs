//! The `deny` command: how the policy classifies a method name.

use weft_policy::{denylist, SecurityPolicy};
use weft_ui::StandardContext;

use super::{EXIT_OK, EXIT_SECURITY};

/// One line per policy: denylist alone, then the standard context.
pub fn describe_name(name: &str) -> Vec<String> {
    let policies = [
        ("denylist", SecurityPolicy::denylist_only()),
        (
            "standard context",
            SecurityPolicy::with_allowlist(StandardContext::names()),
        ),
    ];
    policies
        .iter()
        .map(|(label, policy)| match policy.classify_method(name) {
            None => format!("{label}: `{name}` allowed"),
            Some(violation) => format!(
                "{label}: `{name}` rejected [{}]: {violation}",
                violation.code().as_str()
            ),
        })
        .collect()
}

/// Print the classification of `name`; with no name, list the denylist.
pub fn deny_name(name: Option<&str>) -> i32 {
    let Some(name) = name else {
        for denied in denylist() {
            println!("{denied}");
        }
        return EXIT_OK;
    };
    for line in describe_name(name) {
        println!("{line}");
    }
    if SecurityPolicy::denylist_only().is_method_allowed(name) {
        EXIT_OK
    } else {
        EXIT_SECURITY
    }
}
