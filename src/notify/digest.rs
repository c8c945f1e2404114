// src/notify/digest.rs
use html_escape::{encode_single_quoted_attribute, encode_text};
use std::fmt::Write as _;

use crate::leads::Lead;

/// Subject + HTML body for one run's leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digest {
    pub subject: String,
    pub html: String,
    pub lead_count: usize,
}

impl Digest {
    pub fn compose(leads: &[Lead]) -> Self {
        let subject = format!("🧛 Vampire Scout: {} Hot Leads Found", leads.len());

        let mut html = String::from("<h3>The Scout found these conversations for you:</h3><ul>");
        for lead in leads {
            let _ = write!(
                html,
                "<li><b>[{}]</b> <a href='{}'>{}</a><br>Comments: {} | Heat: 🔥</li><br>",
                encode_text(&lead.group),
                encode_single_quoted_attribute(&lead.url),
                encode_text(&lead.title),
                lead.comments
            );
        }
        html.push_str("</ul>");

        Self {
            subject,
            html,
            lead_count: leads.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead(title: &str, group: &str, comments: u64) -> Lead {
        Lead {
            title: title.to_string(),
            url: format!("https://www.reddit.com/r/x/{comments}"),
            group: group.to_string(),
            comments,
        }
    }

    #[test]
    fn subject_counts_leads() {
        let d = Digest::compose(&[lead("A tax thing", "freelance", 7), lead("Legal help", "marketing", 9)]);
        assert_eq!(d.subject, "🧛 Vampire Scout: 2 Hot Leads Found");
        assert_eq!(d.lead_count, 2);
    }

    #[test]
    fn each_title_and_group_once() {
        let leads = vec![
            lead("Help with IRS penalty", "Entrepreneur", 10),
            lead("Client won't pay", "freelance", 6),
            lead("Burnout again", "solopreneur", 22),
        ];
        let d = Digest::compose(&leads);
        for l in &leads {
            assert_eq!(d.html.matches(&l.title).count(), 1, "title {}", l.title);
            assert_eq!(d.html.matches(&format!("[{}]", l.group)).count(), 1);
            assert!(d.html.contains(&format!("Comments: {}", l.comments)));
        }
        assert_eq!(d.html.matches("<li>").count(), 3);
        // listing order is kept
        let a = d.html.find("Help with IRS").unwrap();
        let b = d.html.find("Burnout again").unwrap();
        assert!(a < b);
    }

    #[test]
    fn markup_in_titles_is_escaped() {
        let d = Digest::compose(&[lead("<script>alert(1)</script> & tax", "g", 5)]);
        assert!(!d.html.contains("<script>"));
        assert!(d.html.contains("&lt;script&gt;"));
        assert!(d.html.contains("&amp; tax"));
    }

    #[test]
    fn quote_in_url_cannot_break_the_attribute() {
        let mut l = lead("t", "g", 5);
        l.url = "https://www.reddit.com/r/x/it's".into();
        let d = Digest::compose(&[l]);
        assert!(!d.html.contains("it's'"));
    }
}
