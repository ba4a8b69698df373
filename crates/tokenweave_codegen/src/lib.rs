//! Tokenweave generators
//!
//! Pure functions that compile a validated [`DesignSystemConfig`] into the
//! artifacts a downstream CSS pipeline consumes:
//!
//! - [`css_variables`]: flat `:root` custom-property block
//! - [`framework_theme`] / [`framework_config`]: nested `theme.extend` object
//!   for a utility-first CSS framework
//! - [`layered_css`]: `@layer` document with base variables, utility classes,
//!   and component classes
//! - [`type_declarations`]: TypeScript declarations enumerating token keys
//! - [`css_in_js_theme`]: plain nested theme object for runtime styling
//!   libraries
//!
//! Plus the render-time [`resolve_component_class`] helper, which composes a
//! component's class string and runs it through [`merge_classes`].
//!
//! Every generator is deterministic: entries are emitted in declaration order
//! and absent token categories contribute nothing (never an error).
//!
//! [`DesignSystemConfig`]: tokenweave_core::DesignSystemConfig

mod class_merge;
mod css_in_js;
mod css_variables;
mod framework_theme;
mod layered_css;
mod resolver;
mod type_decls;

pub use class_merge::merge_classes;
pub use css_in_js::css_in_js_theme;
pub use css_variables::css_variables;
pub use framework_theme::{framework_config, framework_theme, GenerateOptions};
pub use layered_css::layered_css;
pub use resolver::resolve_component_class;
pub use type_decls::type_declarations;
