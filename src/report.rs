use std::fmt;

use num_traits::Float;

use crate::graph_algos::{Distance, SearchReport, Segment};


/// One decimal place, rounding half-up on the shortest decimal form of the value,
/// so 12.25 prints as 12.3 (plain `{:.1}` rounds the binary value and gives 12.2).
fn fmt_km<C: Float + fmt::Display>(value: C) -> String {
    let text = value.to_string();
    if !value.is_finite() {
        return text;
    }

    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let mut fraction = fraction.bytes();
    let tenths = fraction.next().unwrap_or(b'0');
    let round_up = fraction.next().is_some_and(|d| d >= b'5');

    // whole digits followed by the tenths digit, carried as decimal text
    let mut digits: Vec<u8> = whole.bytes().chain(std::iter::once(tenths)).collect();
    if round_up {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let (whole, tenths) = digits.split_at(digits.len() - 1);
    format!(
        "{sign}{}.{}",
        String::from_utf8_lossy(whole),
        String::from_utf8_lossy(tenths)
    )
}


impl<C: Float + fmt::Display> fmt::Display for Distance<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Reached(d) => write!(f, "{} km", fmt_km(*d)),
            Distance::Unreachable => f.write_str("Infinity"),
        }
    }
}

impl<C: Float + fmt::Display> fmt::Display for Segment<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}, {} km", self.from, self.to, fmt_km(self.distance))
    }
}

/// Console report: a blank line, the three counters, the distance, then the route.
impl<C: Float + fmt::Display> fmt::Display for SearchReport<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "Nodes Popped: {}", self.counters.popped)?;
        writeln!(f, "Nodes Expanded: {}", self.counters.expanded)?;
        writeln!(f, "Nodes Generated: {}", self.counters.generated)?;
        writeln!(f, "Distance: {}", self.distance)?;
        writeln!(f, "Route:")?;

        if !self.is_reachable() {
            return writeln!(f, "None");
        }
        for segment in &self.segments {
            writeln!(f, "{segment}")?;
        }
        Ok(())
    }
}
