const SCRIPT_OPEN: &str = "<script";
const SCRIPT_CLOSE: &str = "</script>";

/// Strips `<script>` blocks and stray angle brackets from free text and trims it.
pub fn sanitize_input(input: &str) -> String {
    // ASCII lowercasing keeps byte offsets identical to `input`.
    let lower = input.to_ascii_lowercase();
    let mut out = String::with_capacity(input.len());
    let mut pos = 0;

    while let Some(found) = lower[pos..].find(SCRIPT_OPEN) {
        let start = pos + found;
        let after_tag = start + SCRIPT_OPEN.len();
        let is_tag = lower[after_tag..]
            .chars()
            .next()
            .is_none_or(|c| !(c.is_ascii_alphanumeric() || c == '_'));
        if !is_tag {
            out.push_str(&input[pos..after_tag]);
            pos = after_tag;
            continue;
        }
        let Some(close) = lower[after_tag..].find(SCRIPT_CLOSE) else {
            break;
        };
        out.push_str(&input[pos..start]);
        pos = after_tag + close + SCRIPT_CLOSE.len();
    }
    out.push_str(&input[pos..]);

    out.retain(|c| c != '<' && c != '>');
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_trimmed() {
        assert_eq!(sanitize_input("  Kestrels  "), "Kestrels");
        assert_eq!(sanitize_input(""), "");
    }

    #[test]
    fn test_script_blocks_are_removed() {
        assert_eq!(
            sanitize_input("Kes<script>alert('x')</script>trels"),
            "Kestrels"
        );
        assert_eq!(
            sanitize_input("a<SCRIPT type=\"text/javascript\">x()</Script>b<script>y()</script>c"),
            "abc"
        );
    }

    #[test]
    fn test_angle_brackets_are_removed() {
        assert_eq!(sanitize_input("<b>Falcons</b>"), "bFalcons/b");
        assert_eq!(sanitize_input("3 > 2"), "3  2");
    }

    #[test]
    fn test_unterminated_script_keeps_text() {
        assert_eq!(sanitize_input("<script>alert(1)"), "scriptalert(1)");
    }

    #[test]
    fn test_script_prefix_is_not_a_tag() {
        assert_eq!(sanitize_input("<scripts>ok</script>"), "scriptsok/script");
    }

    #[test]
    fn test_non_ascii_text_survives() {
        assert_eq!(sanitize_input(" Kōwhai <script>x</script>Hawks "), "Kōwhai Hawks");
    }
}
