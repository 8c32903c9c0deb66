//! Cloud-init document rendering
//!
//! Pure formatting of the fixed-structure startup document. Downstream
//! consumers parse this text, so whitespace and key ordering are part of the
//! contract; the tests pin the output byte-for-byte.

/// Render the cloud-init document
///
/// Total over its string inputs: no validation, no failure modes. Empty
/// strings are formatted as-is.
pub fn render(hostname: &str, region: &str, token: &str, secondary: &str) -> String {
    format!(
        "#cloud-config\n\
         \n\
         write_files:\n    \
         string_1: {hostname}\n    \
         string_2: {region}\n\
         \n\
         runcmd:\n  \
         - hostnamectl --no-ask-password set-hostname {hostname}\n  \
         - thing_1='{token}' thing_2='{secondary}' /bin/program\n  \
         - systemctl reboot\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED: &str = "#cloud-config

write_files:
    string_1: greatest-host-ever
    string_2: region-1

runcmd:
  - hostnamectl --no-ask-password set-hostname greatest-host-ever
  - thing_1='secret_secret' thing_2='http://example.com' /bin/program
  - systemctl reboot
";

    #[test]
    fn test_render_exact_document() {
        let doc = render(
            "greatest-host-ever",
            "region-1",
            "secret_secret",
            "http://example.com",
        );
        assert_eq!(doc, EXPECTED);
    }

    #[test]
    fn test_render_keeps_trailing_newline() {
        let doc = render("h", "r", "t", "s");
        assert!(doc.ends_with("systemctl reboot\n"));
    }

    #[test]
    fn test_render_accepts_empty_strings() {
        let doc = render("", "", "", "");
        assert!(doc.starts_with("#cloud-config\n"));
        assert!(doc.contains("thing_1='' thing_2='' /bin/program"));
    }

    #[test]
    fn test_render_embeds_spaces_untouched() {
        let doc = render("slowestHost", "SecondRegion", "bad secret", "1060 West Addison Street");
        assert!(doc.contains("thing_1='bad secret' thing_2='1060 West Addison Street' /bin/program"));
    }
}
