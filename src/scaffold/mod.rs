//! Scaffold generator: fixed templates plus a parameterized reducer skeleton.
//!
//! This is string templating only. `feature_name` is substituted as given;
//! callers are responsible for passing a valid Swift identifier.

use crate::catalog;
use crate::error::Result;

/// Source text of one of the four fixed templates, verbatim.
pub fn template_source(name: &str) -> Result<&'static str> {
    catalog::get_template(name).map(|t| t.code)
}

/// Build a `<feature_name>Feature` reducer skeleton.
///
/// With `include_effects`, a `@Dependency` declaration is inserted ahead of
/// the reducer body and the action enum gains a `task` case that returns a
/// `.run` effect.
pub fn generate_reducer(feature_name: &str, include_effects: bool) -> String {
    let feature = format!("{feature_name}Feature");
    let mut out = String::new();

    out.push_str("import ComposableArchitecture\n\n");
    out.push_str("@Reducer\n");
    out.push_str(&format!("struct {feature} {{\n"));

    out.push_str("  @ObservableState\n");
    out.push_str("  struct State: Equatable {\n");
    out.push_str("  }\n\n");

    out.push_str("  enum Action {\n");
    if include_effects {
        out.push_str("    case task\n");
    }
    out.push_str("  }\n\n");

    if include_effects {
        out.push_str("  @Dependency(\\.continuousClock) var clock\n\n");
    }

    out.push_str("  var body: some ReducerOf<Self> {\n");
    out.push_str("    Reduce { state, action in\n");
    if include_effects {
        out.push_str("      switch action {\n");
        out.push_str("      case .task:\n");
        out.push_str("        return .run { send in\n");
        out.push_str("        }\n");
        out.push_str("      }\n");
    } else {
        out.push_str("      return .none\n");
    }
    out.push_str("    }\n");
    out.push_str("  }\n");
    out.push_str("}\n");

    tracing::debug!(feature = %feature, include_effects, "generated reducer scaffold");
    out
}
