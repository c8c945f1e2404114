// tests/notify_leads.rs
use async_trait::async_trait;
use parking_lot::Mutex;

use lead_scout::notify::{notify_leads, Digest, LogTransport, MailTransport, NotifyOutcome};
use lead_scout::{Lead, NotifyError};

#[derive(Default)]
struct CountingTransport {
    calls: Mutex<Vec<Digest>>,
}

#[async_trait]
impl MailTransport for CountingTransport {
    async fn deliver(&self, digest: &Digest) -> Result<(), NotifyError> {
        self.calls.lock().push(digest.clone());
        Ok(())
    }
    fn name(&self) -> &'static str {
        "counting"
    }
}

fn leads(n: usize) -> Vec<Lead> {
    (0..n)
        .map(|i| Lead {
            title: format!("Lead title number {i}"),
            url: format!("https://www.reddit.com/comments/id{i}/"),
            group: format!("group{i}x"),
            comments: 5 + i as u64,
        })
        .collect()
}

#[tokio::test]
async fn zero_leads_never_touches_transport() {
    let t = CountingTransport::default();
    let out = notify_leads(&t, &[]).await.unwrap();
    assert_eq!(out, NotifyOutcome::Skipped);
    assert!(t.calls.lock().is_empty());
}

#[tokio::test]
async fn one_delivery_per_call_with_matching_count() {
    for n in [1usize, 4, 12] {
        let t = CountingTransport::default();
        let ls = leads(n);
        let out = notify_leads(&t, &ls).await.unwrap();
        assert_eq!(out, NotifyOutcome::Sent { leads: n });

        let calls = t.calls.lock();
        assert_eq!(calls.len(), 1);
        let d = &calls[0];
        assert_eq!(d.subject, format!("🧛 Vampire Scout: {n} Hot Leads Found"));
        for l in &ls {
            // "Lead title number 1" is a prefix of "... 10", so match on the closing tag
            assert_eq!(d.html.matches(&format!("{}</a>", l.title)).count(), 1);
            assert_eq!(d.html.matches(&format!("[{}]", l.group)).count(), 1);
        }
    }
}

#[tokio::test]
async fn log_transport_accepts_digest() {
    let out = notify_leads(&LogTransport, &leads(2)).await.unwrap();
    assert_eq!(out, NotifyOutcome::Sent { leads: 2 });
}
