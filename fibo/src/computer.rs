use crate::Error;

/// Computes the `n`-th Fibonacci number.
///
/// Runs in `O(n)` additions over two running terms. Returns
/// [`Error::Overflow`] if the term does not fit in a `u64`, which is the
/// case for every `n` above [`crate::MAX_INDEX`].
pub fn compute(n: u64) -> Result<u64, Error> {
    let mut a: u64 = 0;
    let mut b: u64 = 1;
    if n == 0 {
        return Ok(a);
    }

    log::debug!("Computing F({n})");
    for step in 1..n {
        let temp = a.checked_add(b).ok_or(Error::Overflow { n })?;
        log::trace!("F({}) = {temp}", step + 1);
        a = b;
        b = temp;
    }

    Ok(b)
}
