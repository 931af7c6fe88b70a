//! Small helpers shared by components and pages.

/// Join class names, skipping empty entries and disabled optional classes.
///
/// ```
/// use shared_ui::class_names;
///
/// let active = true;
/// assert_eq!(
///     class_names(&["nav-link", if active { "active" } else { "" }]),
///     "nav-link active"
/// );
/// ```
pub fn class_names(classes: &[&str]) -> String {
    classes
        .iter()
        .flat_map(|c| c.split_whitespace())
        .fold(Vec::<&str>::new(), |mut acc, class| {
            if !acc.contains(&class) {
                acc.push(class);
            }
            acc
        })
        .join(" ")
}
