use rustc_hash::FxHashSet;

/// Hosts that must never reach the output. Exact, case-sensitive matches only.
#[derive(Debug, Default, Clone)]
pub struct Whitelist {
    hosts: FxHashSet<Box<str>>,
}

impl Whitelist {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let hosts = entries
            .into_iter()
            .map(|s| Into::<String>::into(s).into_boxed_str())
            .collect();
        Self { hosts }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.hosts.contains(token)
    }
}
