//! Splits raw bindings text into directive + argument groups.
//!
//! Arguments are consumed according to each directive's declared arity.
//! Malformed input degrades to fewer arguments instead of failing: a
//! directive never swallows a token that starts another directive.

use crate::models::binding::{arity_of, is_directive, BT_SELECT};
use crate::models::{Arity, Binding};
use tracing::debug;

/// Tokenizes bindings text such as `"&kp Q &lt 1 SPACE &trans"`.
///
/// # Examples
///
/// ```
/// use keyviz::parser::tokenize;
///
/// let bindings = tokenize("&kp Q &kp W &mo 1 &trans &none");
/// assert_eq!(bindings.len(), 5);
/// assert_eq!(bindings[2].to_string(), "&mo 1");
/// ```
#[must_use]
pub fn tokenize(raw: &str) -> Vec<Binding> {
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    let mut bindings = Vec::new();
    let mut idx = 0;

    while idx < tokens.len() {
        let token = tokens[idx];
        idx += 1;

        let Some(name) = token.strip_prefix(crate::constants::DIRECTIVE_SIGIL) else {
            debug!("Skipping orphan token '{}' outside any directive", token);
            continue;
        };

        let mut binding = Binding::new(name);
        let argument_at = |i: usize| tokens.get(i).copied().filter(|t| !is_directive(t));

        match arity_of(name) {
            Arity::None => {}
            Arity::Single => {
                if let Some(arg) = argument_at(idx) {
                    binding.args.push(arg.to_string());
                    idx += 1;
                }
            }
            Arity::Pair => {
                if let (Some(first), Some(second)) = (argument_at(idx), argument_at(idx + 1)) {
                    binding.args.push(first.to_string());
                    binding.args.push(second.to_string());
                    idx += 2;
                } else if let Some(first) = argument_at(idx) {
                    binding.args.push(first.to_string());
                    idx += 1;
                }
            }
            Arity::Bluetooth => {
                if let Some(command) = argument_at(idx) {
                    binding.args.push(command.to_string());
                    idx += 1;
                    if command == BT_SELECT {
                        if let Some(device) = argument_at(idx).filter(|t| is_numeric(t)) {
                            binding.args.push(device.to_string());
                            idx += 1;
                        }
                    }
                }
            }
        }

        bindings.push(binding);
    }

    bindings
}

/// Tokenizes bindings text and returns each binding as its joined source string.
#[must_use]
pub fn tokenize_raw(raw: &str) -> Vec<String> {
    tokenize(raw).iter().map(ToString::to_string).collect()
}

fn is_numeric(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keycode_db::translate;

    #[test]
    fn test_mixed_bindings_translate() {
        let bindings = tokenize_raw("&kp Q &kp W &mo 1 &trans &none");
        assert_eq!(bindings, vec!["&kp Q", "&kp W", "&mo 1", "&trans", "&none"]);

        let labels: Vec<String> = bindings.iter().map(|b| translate(b)).collect();
        assert_eq!(labels, vec!["Q", "W", "L1", "▽", "✕"]);
    }

    #[test]
    fn test_layer_tap_takes_two_arguments() {
        let bindings = tokenize("&lt 1 SPACE &kp A");
        assert_eq!(bindings.len(), 2);
        assert_eq!(bindings[0].args, vec!["1", "SPACE"]);
        assert_eq!(bindings[1].args, vec!["A"]);
    }

    #[test]
    fn test_layer_tap_degrades_to_one_argument() {
        let bindings = tokenize("&lt 1 &kp A");
        assert_eq!(bindings.len(), 2);
        assert_eq!(bindings[0].args, vec!["1"]);
        assert_eq!(bindings[1].to_string(), "&kp A");

        let bindings = tokenize("&lt &kp A");
        assert!(bindings[0].args.is_empty());
        assert_eq!(bindings.len(), 2);
    }

    #[test]
    fn test_missing_argument_at_end_is_lenient() {
        let bindings = tokenize("&kp A &kp");
        assert_eq!(bindings.len(), 2);
        assert_eq!(bindings[1].to_string(), "&kp");

        let bindings = tokenize("&lt 2");
        assert_eq!(bindings[0].args, vec!["2"]);
    }

    #[test]
    fn test_single_argument_does_not_swallow_directive() {
        let bindings = tokenize("&mo &trans");
        assert_eq!(bindings.len(), 2);
        assert!(bindings[0].args.is_empty());
        assert_eq!(bindings[1].directive, "trans");
    }

    #[test]
    fn test_bluetooth_select_takes_device() {
        let bindings = tokenize("&bt BT_SEL 0 &bt BT_CLR &bt BT_NXT 3");
        assert_eq!(bindings[0].args, vec!["BT_SEL", "0"]);
        assert_eq!(bindings[1].args, vec!["BT_CLR"]);
        assert_eq!(bindings[2].args, vec!["BT_NXT"]);
        assert_eq!(bindings.len(), 3);
    }

    #[test]
    fn test_bluetooth_select_non_numeric_device_not_consumed() {
        let bindings = tokenize("&bt BT_SEL &kp A");
        assert_eq!(bindings[0].args, vec!["BT_SEL"]);
        assert_eq!(bindings.len(), 2);
    }

    #[test]
    fn test_zero_arity_directives() {
        let bindings = tokenize("&trans &none &bootloader &custom_macro");
        assert_eq!(bindings.len(), 4);
        assert!(bindings.iter().all(|b| b.args.is_empty()));
    }

    #[test]
    fn test_arity_never_exceeded() {
        let inputs = [
            "&kp A B C &mo 1 2 &lt 1 SPACE X &bt BT_SEL 1 2 &trans Q",
            "&tog &to 1 &sl 2 3 &out OUT_USB OUT_BLE",
        ];
        for input in inputs {
            for binding in tokenize(input) {
                assert!(binding.args.len() <= binding.arity().max_args(), "{binding}");
                assert!(binding.args.iter().all(|a| !is_directive(a)));
            }
        }
    }

    #[test]
    fn test_orphan_tokens_are_skipped() {
        let bindings = tokenize("stray &kp A");
        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings[0].to_string(), "&kp A");
    }

    #[test]
    fn test_whitespace_runs_and_newlines() {
        let bindings = tokenize("  &kp   A\n\t&kp B  ");
        assert_eq!(bindings.len(), 2);
    }
}
