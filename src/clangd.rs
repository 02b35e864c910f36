//Compiler advertised to clangd in the generated block
static COMPILER: &str = "clang";

///Reformats a pkg-config flag list for a bracketed clangd list
/// # Arguments
/// * `raw` - The captured pkg-config stdout
///
/// Spaces become comma-space so the tokens read as list elements and
/// the trailing newline becomes a space. Every other character is
/// copied through unchanged. The pass is applied exactly once; running
/// it again would rewrite the spaces it introduced itself.
pub fn format_flags(raw: &str) -> String {
    let mut args = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            ' ' => args.push_str(", "),
            '\n' => args.push(' '),
            _ => args.push(c),
        }
    }
    args
}

///Renders the three line CompileFlags block for the given flag list
pub fn render_config(args: &str) -> String {
    format!(
        "CompileFlags:\n  Add: [{}]\n  Compiler: {}\n",
        args, COMPILER
    )
}
