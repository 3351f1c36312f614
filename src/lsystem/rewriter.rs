use lsystem::error::LSystemError;
use lsystem::trie::Trie;

/// Expands an axiom over a fixed number of generations using a trie of
/// production rules. Each generation is a single left-to-right pass over the
/// current sequence; rules are not re-applied to their own output within the
/// same generation.
pub struct Rewriter {
    trie: Trie
}

impl Rewriter {
    pub fn new(rules: &[String]) -> Result<Rewriter, LSystemError> {
        let mut trie = Trie::new();
        for raw in rules {
            let stripped: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
            let parts: Vec<&str> = stripped.split('=').collect();
            if parts.len() != 2 || parts[0].is_empty() {
                return Err(LSystemError::MalformedRule(raw.clone()));
            }
            trie.insert(parts[0].as_bytes(), parts[1].to_string())?;
        }
        Ok(Rewriter { trie })
    }

    pub fn expand(&self, axiom: &str, generations: u32) -> String {
        let mut seq = axiom.to_string();
        for _ in 0..generations {
            let bytes = seq.as_bytes();
            let mut next = String::with_capacity(bytes.len());
            let mut i = 0;
            while i < bytes.len() {
                let (fragment, end) = self.trie.longest_match(bytes, i);
                next.push_str(&fragment);
                i = end;
            }
            seq = next;
        }
        seq
    }
}
