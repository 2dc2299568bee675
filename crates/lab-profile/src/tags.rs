//! Free-form label lists edited slot by slot.
//!
//! Equipment, reagents and research interests all behave the same way:
//! "add" appends an empty slot for the user to type into, empty labels are
//! allowed, and out-of-range indices are ignored.

/// Append an empty slot.
pub fn push_empty(labels: &mut Vec<String>) {
    labels.push(String::new());
}

/// Replace the label at `index`. Returns `false` if `index` is out of range.
pub fn update(labels: &mut [String], index: usize, value: impl Into<String>) -> bool {
    labels.get_mut(index).is_some_and(|slot| {
        *slot = value.into();
        true
    })
}

/// Remove the label at `index`. Returns `false` if `index` is out of range.
pub fn remove(labels: &mut Vec<String>, index: usize) -> bool {
    if index < labels.len() {
        labels.remove(index);
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_update_remove() {
        let mut labels = vec!["PCR".to_string()];
        push_empty(&mut labels);
        assert_eq!(labels, vec!["PCR", ""]);

        assert!(update(&mut labels, 1, "Centrifuge"));
        assert!(remove(&mut labels, 0));
        assert_eq!(labels, vec!["Centrifuge"]);
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut labels = vec!["a".to_string()];
        assert!(!update(&mut labels, 3, "x"));
        assert!(!remove(&mut labels, 1));
        assert_eq!(labels, vec!["a"]);
    }
}
