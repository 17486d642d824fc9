/// Signals that a buffer could not grow.
///
/// `stage` names the buffer that failed, e.g. `"token list"` or
/// `"operand stack"`, and is shown to the user in the error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationError {
    /// The buffer that failed to grow.
    pub stage: &'static str,
}

impl std::fmt::Display for AllocationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Out of memory while growing the {}.", self.stage)
    }
}

impl std::error::Error for AllocationError {}

/// Pushes `item` onto `items`, reserving space first.
///
/// Growth is amortized the same way `Vec::push` grows, but a failed
/// reservation is reported instead of aborting.
///
/// # Errors
/// Returns an [`AllocationError`] tagged with `stage` if the buffer cannot
/// grow.
///
/// # Example
/// ```
/// use hsolver::util::alloc::push_checked;
///
/// let mut stack = Vec::new();
/// push_checked(&mut stack, 1.5, "operand stack").unwrap();
/// push_checked(&mut stack, 2.5, "operand stack").unwrap();
/// assert_eq!(stack, vec![1.5, 2.5]);
/// ```
pub fn push_checked<T>(items: &mut Vec<T>,
                       item: T,
                       stage: &'static str)
                       -> Result<(), AllocationError> {
    if items.len() == items.capacity() {
        items.try_reserve(1).map_err(|_| AllocationError { stage })?;
    }
    items.push(item);
    Ok(())
}
