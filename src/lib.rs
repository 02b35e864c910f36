//! A generator for `.clangd` configuration.
//!
//! The tool asks pkg-config for the compile flags of the native
//! libraries the project builds against and prints a `CompileFlags`
//! block that clangd picks up for code completion.
//!
//! # Installation
//! To install this tool, you need to have rust installed on your system.
//! ```sh
//! cargo install clangd_gen
//! ```
//!
//! # Usage
//! Run it from the project root and redirect into the config file:
//! ```sh
//! clangd_gen > .clangd
//! ```
//! On success the output looks like
//! ```yaml
//! CompileFlags:
//!   Add: [-I/usr/include/chafa, -I/usr/include/ncursesw ]
//!   Compiler: clang
//! ```
//! If the pkg-config query fails the tool prints a single error line
//! and exits with status 1.

/// Contains code that renders the clangd config block
pub mod clangd;
/// Contains the pkg-config query
pub mod pkg_config;
/// Contains logger
pub mod utils;
