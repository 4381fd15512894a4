use std::hash::Hash;

use indexmap::IndexSet;

/// Drop duplicates, keeping the first occurrence of each element in order.
pub fn unique<T, I>(items: I) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    T: Eq + Hash,
{
    items.into_iter().collect::<IndexSet<T>>().into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_unique_elements_as_is() {
        let out = unique(["elem1", "elem2", "elem3"]);
        assert_eq!(out, vec!["elem1", "elem2", "elem3"]);
    }

    #[test]
    fn removes_duplicates_in_first_seen_order() {
        let out = unique(vec!["class1".to_string(), "class2".to_string(), "class1".to_string()]);
        assert_eq!(out, vec!["class1".to_string(), "class2".to_string()]);

        let out = unique(["b", "a", "b", "c", "a"]);
        assert_eq!(out, vec!["b", "a", "c"]);
    }

    #[test]
    fn empty_input() {
        let out: Vec<&str> = unique(Vec::<&str>::new());
        assert!(out.is_empty());
    }
}
