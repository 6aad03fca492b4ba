use fmx_core::{ScriptStep, StepKind, COMMENT_STEP_NAME, INDENT_UNIT};

use crate::comments::strip_script_comments;

/// Renders a script's step sequence as indented plain text.
///
/// The indent level starts at zero, drops by one before `End`/`Else` style
/// steps (never below zero), and rises by one after `Loop`/`If`/`Else` style
/// steps. Disabled steps and FileMaker comment steps emit nothing.
/// Returns the empty string when no step produces output.
pub fn format_script(steps: &[ScriptStep]) -> String {
    let mut indent_level: usize = 0;
    let mut lines: Vec<String> = Vec::new();

    for step in steps {
        if !step.enabled {
            continue;
        }
        if step.name == COMMENT_STEP_NAME {
            continue;
        }

        let kind = StepKind::of(&step.name);
        if matches!(kind, StepKind::BlockEnd | StepKind::BlockBranch) {
            indent_level = indent_level.saturating_sub(1);
        }

        let clean_text = strip_script_comments(&step.text);
        if !clean_text.is_empty() {
            for line in clean_text.split('\n') {
                lines.push(format!("{}{}", INDENT_UNIT.repeat(indent_level), line));
            }
        }

        if matches!(kind, StepKind::BlockStart | StepKind::BlockBranch) {
            indent_level += 1;
        }
    }

    if lines.is_empty() {
        String::new()
    } else {
        format!("{}\n", lines.join("\n"))
    }
}

#[cfg(test)]
mod format_tests {
    use super::*;

    fn step(name: &str, text: &str) -> ScriptStep {
        ScriptStep {
            name: name.to_string(),
            enabled: true,
            text: text.to_string(),
        }
    }

    #[test]
    fn format_indents_loop_body_one_level() {
        let steps = vec![
            step("Set Variable", "Set Variable [ $i ; 0 ]"),
            step("Loop", "Loop"),
            step("Set Variable", "x"),
            step("End Loop", "End Loop"),
        ];

        assert_eq!(
            format_script(&steps),
            "Set Variable [ $i ; 0 ]\nLoop\n    x\nEnd Loop\n"
        );
    }

    #[test]
    fn format_emits_branch_steps_one_level_shallower_than_the_body() {
        let steps = vec![
            step("If", "If [ $x ]"),
            step("Set Field", "a"),
            step("Else If", "Else If [ $y ]"),
            step("Set Field", "b"),
            step("Else", "Else"),
            step("Set Field", "c"),
            step("End If", "End If"),
        ];

        assert_eq!(
            format_script(&steps),
            "If [ $x ]\n    a\nElse If [ $y ]\n    b\nElse\n    c\nEnd If\n"
        );
    }

    #[test]
    fn format_nests_blocks_cumulatively() {
        let steps = vec![
            step("Loop", "Loop"),
            step("If", "If [ $x ]"),
            step("Perform Script", "inner"),
            step("End If", "End If"),
            step("End Loop", "End Loop"),
        ];

        assert_eq!(
            format_script(&steps),
            "Loop\n    If [ $x ]\n        inner\n    End If\nEnd Loop\n"
        );
    }

    #[test]
    fn format_never_drops_indent_below_zero() {
        let steps = vec![
            step("End If", "End If"),
            step("End Loop", "End Loop"),
            step("Set Field", "a"),
        ];

        assert_eq!(format_script(&steps), "End If\nEnd Loop\na\n");
    }

    #[test]
    fn format_skips_disabled_steps_even_when_they_control_flow() {
        let steps = vec![
            ScriptStep {
                name: "Loop".to_string(),
                enabled: false,
                text: "Loop".to_string(),
            },
            step("Set Field", "a"),
        ];

        assert_eq!(format_script(&steps), "a\n");
    }

    #[test]
    fn format_skips_comment_marker_steps() {
        let steps = vec![
            step(COMMENT_STEP_NAME, "# explanatory note"),
            step("Set Field", "a"),
        ];

        assert_eq!(format_script(&steps), "a\n");
    }

    #[test]
    fn format_indents_every_line_of_multi_line_step_text() {
        let steps = vec![
            step("Loop", "Loop"),
            step("Insert Text", "first\nsecond"),
            step("End Loop", "End Loop"),
        ];

        assert_eq!(
            format_script(&steps),
            "Loop\n    first\n    second\nEnd Loop\n"
        );
    }

    #[test]
    fn format_skips_steps_whose_text_strips_to_nothing_but_keeps_indent_effect() {
        let steps = vec![
            step("Loop", "/* whole text commented */"),
            step("Set Field", "a"),
            step("End Loop", "End Loop"),
        ];

        // The Loop step emits nothing but still opens a block.
        assert_eq!(format_script(&steps), "    a\nEnd Loop\n");
    }

    #[test]
    fn format_returns_empty_string_when_nothing_is_emitted() {
        assert_eq!(format_script(&[]), "");

        let steps = vec![
            ScriptStep {
                name: "Set Field".to_string(),
                enabled: false,
                text: "a".to_string(),
            },
            step(COMMENT_STEP_NAME, "note"),
            step("Set Field", ""),
        ];
        assert_eq!(format_script(&steps), "");
    }
}
