use nom::{
    character::complete::{digit1, multispace0, one_of},
    combinator::opt,
    IResult, Parser,
};

/// Optional sign followed by the leading run of decimal digits
fn leading_integer(input: &str) -> IResult<&str, (Option<char>, &str)> {
    let (input, _) = multispace0.parse(input)?;
    (opt(one_of("+-")), digit1).parse(input)
}

/// Parse the leading base-10 integer of a cell.
///
/// Anything after the digits is ignored ("3.7" -> 3, "12abc" -> 12).
/// Returns `None` for blank or non-numeric cells and for values that do not
/// fit in an `i64`.
pub fn parse_int(cell: &str) -> Option<i64> {
    let (_, (sign, digits)) = leading_integer(cell).ok()?;
    let value: i64 = digits.parse().ok()?;
    Some(if sign == Some('-') { -value } else { value })
}

/// Parse a count-valued cell (goals, shots, cards). Missing, non-numeric and
/// negative cells count as zero.
pub fn parse_count(cell: &str) -> u64 {
    match parse_int(cell) {
        Some(v) if v > 0 => v as u64,
        _ => 0,
    }
}
