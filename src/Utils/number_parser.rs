/// Permissive numeric parsing of command line arguments, in the manner of C's atoi/atof:
/// leading whitespace is skipped, the longest numeric prefix is taken and whatever follows is ignored.
/// Text without a numeric prefix reads as zero. Nothing here ever fails.
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag_no_case, take_while},
    character::complete::{digit1, one_of},
    combinator::{opt, recognize},
    number::complete::recognize_float,
};

/// Characters C's isspace() accepts in the default locale
fn is_c_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

fn leading_space(input: &str) -> IResult<&str, &str> {
    take_while(is_c_space).parse(input)
}

/// Optional sign followed by decimal digits
fn integer_prefix(input: &str) -> IResult<&str, &str> {
    recognize((opt(one_of("+-")), digit1)).parse(input)
}

fn special_value(input: &str) -> IResult<&str, &str> {
    recognize((
        opt(one_of("+-")),
        alt((
            tag_no_case("infinity"),
            tag_no_case("inf"),
            tag_no_case("nan"),
        )),
    ))
    .parse(input)
}

/// Decimal number with optional sign and exponent, or one of inf/infinity/nan.
/// recognize_float cuts on an exponent marker without digits ("1e", "1e+"): that is a Failure, not an Error.
fn float_prefix(input: &str) -> IResult<&str, &str> {
    alt((recognize_float, special_value)).parse(input)
}

/// atoi: values beyond the i32 range saturate
pub fn parse_int(input: &str) -> i32 {
    let Ok((rest, _)) = leading_space(input) else {
        return 0;
    };
    match integer_prefix(rest) {
        Ok((_, digits)) => {
            let (negative, digits) = match digits.as_bytes()[0] {
                b'-' => (true, &digits[1..]),
                b'+' => (false, &digits[1..]),
                _ => (false, digits),
            };
            let magnitude = digits.bytes().fold(0i64, |acc, d| {
                acc.saturating_mul(10).saturating_add((d - b'0') as i64)
            });
            let value = if negative { -magnitude } else { magnitude };
            value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
        }
        Err(_) => 0,
    }
}

/// atof: double precision; overflow gives +-inf
pub fn parse_float(input: &str) -> f64 {
    let Ok((rest, _)) = leading_space(input) else {
        return 0.0;
    };
    let number = match float_prefix(rest) {
        Ok((_, number)) => number,
        // "1e" reads as 1: retry on the mantissa in front of the dangling exponent marker
        Err(nom::Err::Failure(_)) => {
            let mantissa_end = rest.find(['e', 'E']).unwrap_or(rest.len());
            match float_prefix(&rest[..mantissa_end]) {
                Ok((_, number)) => number,
                Err(_) => return 0.0,
            }
        }
        Err(_) => return 0.0,
    };
    number.parse::<f64>().unwrap_or(0.0)
}
