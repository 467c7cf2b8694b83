//! Placeholder substitution for record templates.
//!
//! Recognized tokens are `{{number}}`, `{{title}}`, `{{status}}` and `{{date}}`.
//! Substitution is a single left-to-right pass over the template, so text coming
//! from a value is never scanned again for tokens. Unknown `{{...}}` sequences are
//! copied through untouched.

pub const DEFAULT_TEMPLATE: &str = r#"# ADR {{number}}: {{title}}

**Status**: {{status}}  
**Date**: {{date}}

---

## Context

Describe here the problem, need, or motivation for this decision. Include the current scenario, technical or business constraints, and the factors influencing the choice.

## Decision

Clearly state the decision made. For example:

> We decided to adopt the XYZ framework for developing REST APIs in the ABC project.

## Considered Alternatives

- **Alternative A** (chosen): reasons for the choice...
- **Alternative B**: reasons for not choosing...
- **Alternative C**: pros and cons...

## Consequences

Explain the impacts of this decision:

- Immediate or long-term benefits
- Possible risks or side effects
- Actions required to implement the decision

## Relations

- Replaces ADR: 'adr-XXX.md' _(if applicable)_
- Replaced by ADR: 'adr-XXX.md' _(if applicable)_
- Related to: issues, RFCs, previous decisions

---

_This ADR follows the model of [Joel Parker Henderson](https://github.com/joelparkerhenderson/architecture-decision-record)_
"#;

/// Values substituted into a template.
#[derive(Debug, Clone, Copy)]
pub struct TemplateValues<'a> {
    pub number: &'a str,
    pub status: &'a str,
    pub title: &'a str,
    pub date: &'a str,
}

impl<'a> TemplateValues<'a> {
    fn pairs(&self) -> [(&'static str, &'a str); 4] {
        [
            ("{{number}}", self.number),
            ("{{status}}", self.status),
            ("{{title}}", self.title),
            ("{{date}}", self.date),
        ]
    }
}

pub fn render(template: &str, values: &TemplateValues<'_>) -> String {
    let pairs = values.pairs();
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let candidate = &rest[open..];

        match pairs.iter().find(|(token, _)| candidate.starts_with(token)) {
            Some((token, value)) => {
                out.push_str(value);
                rest = &candidate[token.len()..];
            }
            None => {
                out.push('{');
                rest = &candidate[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values() -> TemplateValues<'static> {
        TemplateValues {
            number: "001",
            status: "Accepted",
            title: "Test Decision",
            date: "2024-03-20",
        }
    }

    #[test]
    fn fills_all_placeholders() {
        let template = "ADR {{number}}: {{title}} ({{status}}) - {{date}}";
        assert_eq!(
            render(template, &values()),
            "ADR 001: Test Decision (Accepted) - 2024-03-20"
        );
    }

    #[test]
    fn replaces_repeated_placeholders() {
        let out = render("{{title}}/{{title}}/{{number}}{{number}}", &values());
        assert_eq!(out, "Test Decision/Test Decision/001001");
    }

    #[test]
    fn missing_placeholders_are_fine() {
        assert_eq!(render("no tokens here", &values()), "no tokens here");
        assert_eq!(render("", &values()), "");
    }

    #[test]
    fn unknown_tokens_pass_through() {
        assert_eq!(
            render("{{owner}} {{number}} {{ title }} {{", &values()),
            "{{owner}} 001 {{ title }} {{"
        );
    }

    #[test]
    fn token_after_stray_brace() {
        assert_eq!(render("{{{number}}}", &values()), "{001}");
    }

    #[test]
    fn values_are_not_rescanned() {
        let tricky = TemplateValues {
            number: "7",
            status: "{{number}}",
            title: "{{date}}",
            date: "today",
        };
        assert_eq!(
            render("{{status}} {{title}} {{date}}", &tricky),
            "{{number}} {{date}} today"
        );
    }

    #[test]
    fn default_template_renders_heading_and_status() {
        let out = render(DEFAULT_TEMPLATE, &values());
        assert!(out.starts_with("# ADR 001: Test Decision\n"));
        assert!(out.contains("**Status**: Accepted  \n"));
        assert!(out.contains("**Date**: 2024-03-20\n"));
        assert!(!out.contains("{{"));
    }
}
