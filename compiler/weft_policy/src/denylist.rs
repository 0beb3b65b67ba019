//! Method names that are never callable, whatever the capability context.
//!
//! Evaluation, reflection, process control, file/IO and global-state hooks
//! of a general-purpose host object model. Matching is exact: `reader` is
//! fine, `read` is not.

/// Denied method names.
///
/// Sorted for binary search.
const DENYLIST: &[&str] = &[
    "__send__", "abort", "alias_method", "ancestors", "at_exit", "autoload", "binding",
    "caller", "caller_locations", "chdir", "class", "class_eval", "class_exec",
    "class_variable_get", "class_variable_set", "class_variables", "clone", "const_get",
    "const_missing", "const_set", "constants", "define_method", "define_singleton_method",
    "dir", "display", "dup", "eval", "exec", "exit", "extend", "fail", "file", "fork",
    "freeze", "gets", "global_variables", "include", "instance_eval", "instance_exec",
    "instance_method", "instance_variable_get", "instance_variable_set", "instance_variables",
    "io", "itself", "kill", "load", "loop", "method", "method_missing", "methods",
    "module_eval", "module_function", "object_id", "open", "pipe", "popen", "pp", "prepend",
    "print", "private", "protected", "public", "public_method", "public_send", "putc", "puts",
    "raise", "read", "readline", "readlines", "remove_const", "remove_method", "require",
    "require_relative", "respond_to_missing", "send", "set_trace_func", "singleton_class",
    "singleton_method", "sleep", "spawn", "superclass", "syscall", "sysopen", "sysread",
    "system", "syswrite", "tap", "then", "throw", "trace_var", "trap", "undef_method", "warn",
    "write",
];

/// Whether `name` is on the denylist.
pub fn is_denylisted(name: &str) -> bool {
    DENYLIST.binary_search(&name).is_ok()
}

/// The full denylist, sorted.
pub fn denylist() -> &'static [&'static str] {
    DENYLIST
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted() {
        for window in DENYLIST.windows(2) {
            assert!(
                window[0] < window[1],
                "denylist not sorted: {:?} >= {:?}",
                window[0],
                window[1]
            );
        }
    }

    #[test]
    fn eval_family_denied() {
        for name in [
            "eval",
            "instance_eval",
            "class_eval",
            "module_eval",
            "instance_exec",
            "class_exec",
            "binding",
        ] {
            assert!(is_denylisted(name), "{name}");
        }
    }

    #[test]
    fn reflection_denied() {
        for name in [
            "send",
            "public_send",
            "__send__",
            "method",
            "define_method",
            "const_get",
            "instance_variable_get",
            "instance_variable_set",
            "singleton_class",
            "class",
            "tap",
            "then",
            "object_id",
        ] {
            assert!(is_denylisted(name), "{name}");
        }
    }

    #[test]
    fn process_and_io_denied() {
        for name in [
            "system", "exec", "spawn", "fork", "syscall", "popen", "exit", "abort", "open",
            "read", "write", "file", "dir", "io", "load", "require", "require_relative",
            "global_variables", "set_trace_func", "trace_var",
        ] {
            assert!(is_denylisted(name), "{name}");
        }
    }

    #[test]
    fn exact_match_only() {
        assert!(!is_denylisted("reader"));
        assert!(!is_denylisted("evaluate"));
        assert!(!is_denylisted("text"));
        assert!(!is_denylisted("Eval"));
        assert!(!is_denylisted(""));
    }
}
