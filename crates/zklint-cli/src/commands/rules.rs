use zklint_output::OutputFormatter;

/// Run `zklint rules` — print the rule catalog.
pub fn run(formatter: &dyn OutputFormatter) -> i32 {
    let output = formatter.format_rules(&zklint_rules::registry::rule_metas());
    print!("{}", output);
    0
}
