//! The fixed pool of markdown documents the mock backend answers with.

use rand::Rng;

/// Headings, a bullet list, a fenced javascript block, emphasis.
pub const HEADINGS_AND_CODE: &str = r#"Here's a simple markdown example:
# Heading 1
## Heading 2
- List item 1
- List item 2

```javascript
const code = "This is a code block";
console.log(code);
```

*italic* and **bold** text."#;

/// A GFM table followed by a blockquote.
pub const TABLE_AND_QUOTE: &str = r#"Let me explain with a table:
| Feature | Description |
|---------|-------------|
| Tables | Easy to create |
| Lists | Very useful |
| Code | Syntax highlighted |

> This is a blockquote
> With multiple lines"#;

/// Ordered list, inline code, a rule, a link and an image.
pub const LINKS_AND_IMAGES: &str = r#"Here's how to use markdown:
1. Start with headers
2. Add some **bold** text
3. Include `inline code`

---
### Links and Images
[Example Link](https://example.com)
![Image Alt Text](https://example.com/image.jpg)"#;

/// A python block and nested bullets.
pub const PYTHON_AND_NESTED_LIST: &str = r#"Let's talk about code:
```python
def hello_world():
    print("Hello, World!")
    return True
```

And some inline math: `E = mc^2`

* Bullet point 1
* Bullet point 2
  * Nested point
  * Another nested point"#;

/// Every canned document, in a stable order.
pub const CANNED_RESPONSES: [&str; 4] = [
    HEADINGS_AND_CODE,
    TABLE_AND_QUOTE,
    LINKS_AND_IMAGES,
    PYTHON_AND_NESTED_LIST,
];

/// Immutable pool of documents with uniform random selection.
#[derive(Debug, Clone, Copy)]
pub struct CannedPool {
    documents: &'static [&'static str],
}

impl CannedPool {
    /// Wraps a static set of documents. An empty slice yields a pool whose
    /// [`pick`](Self::pick) always returns `None`.
    pub const fn new(documents: &'static [&'static str]) -> Self {
        Self { documents }
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn documents(&self) -> &'static [&'static str] {
        self.documents
    }

    pub fn contains(&self, document: &str) -> bool {
        self.documents.iter().any(|d| *d == document)
    }

    /// Picks one document uniformly at random using the thread-local RNG.
    pub fn pick(&self) -> Option<&'static str> {
        self.pick_with(&mut rand::rng())
    }

    /// Picks one document uniformly at random using `rng`.
    pub fn pick_with<R: Rng>(&self, rng: &mut R) -> Option<&'static str> {
        if self.documents.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.documents.len());
        Some(self.documents[index])
    }
}

impl Default for CannedPool {
    fn default() -> Self {
        Self::new(&CANNED_RESPONSES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pool_has_four_documents() {
        let pool = CannedPool::default();
        assert_eq!(pool.len(), 4);
        assert!(CANNED_RESPONSES.iter().all(|d| pool.contains(d)));
    }

    #[test]
    fn pick_returns_a_pool_member() {
        let pool = CannedPool::default();
        for _ in 0..20 {
            let doc = pool.pick().expect("non-empty pool");
            assert!(pool.contains(doc));
        }
    }

    #[test]
    fn empty_pool_picks_nothing() {
        let pool = CannedPool::new(&[]);
        assert!(pool.is_empty());
        assert_eq!(pool.pick(), None);
    }

    #[test]
    fn selection_is_roughly_uniform() {
        let pool = CannedPool::default();
        let draws = 4_000;
        let mut counts = [0usize; 4];
        for _ in 0..draws {
            let doc = pool.pick().expect("non-empty pool");
            let index = CANNED_RESPONSES
                .iter()
                .position(|d| *d == doc)
                .expect("member of pool");
            counts[index] += 1;
        }
        // Expected 1000 each; the band is many standard deviations wide.
        for (index, count) in counts.iter().enumerate() {
            assert!(
                (700..=1300).contains(count),
                "document {index} drawn {count} times out of {draws}: {counts:?}"
            );
        }
    }

    #[test]
    fn documents_are_markdown_rich() {
        assert!(TABLE_AND_QUOTE.contains("|---------|"));
        assert!(HEADINGS_AND_CODE.contains("```javascript"));
        assert!(LINKS_AND_IMAGES.contains("[Example Link](https://example.com)"));
        assert!(PYTHON_AND_NESTED_LIST.contains("  * Nested point"));
    }
}
