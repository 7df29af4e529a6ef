//! 节点字母映射
//!
//! 把路线上有字母的节点按访问顺序拼成一个字符串

use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterMapping {
    letters: BTreeMap<String, char>,
}

impl LetterMapping {
    pub fn new(letters: BTreeMap<String, char>) -> Self {
        Self { letters }
    }

    pub fn letter(&self, node: &str) -> Option<char> {
        self.letters.get(node).copied()
    }

    /// 忽略没有字母的节点，其余按顺序拼接
    pub fn derive<S: AsRef<str>>(&self, steps: &[S]) -> String {
        steps
            .iter()
            .filter_map(|step| self.letter(step.as_ref()))
            .collect()
    }
}

impl From<&BTreeMap<String, char>> for LetterMapping {
    fn from(letters: &BTreeMap<String, char>) -> Self {
        Self::new(letters.clone())
    }
}
