//! Selector shapes and parsing.

use nom::{
    IResult,
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{char, multispace1},
    combinator::{map, opt},
    sequence::preceded,
};

use crate::error::SelectorError;

/// A parsed stylesheet selector.
///
/// Only the shapes the cascade can match are representable; any other
/// selector string fails to parse and is treated as inert by
/// [`Stylesheet::rule`](crate::Stylesheet::rule).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Selector {
    /// `*`, the universal default rule.
    Universal,
    /// `p`, matching an element by name.
    Element(String),
    /// `.note`, matching any element carrying the class.
    Class(String),
    /// `p.note`, element name and class together.
    ElementClass(String, String),
    /// `h1 i`, an element whose immediate parent has the named element.
    /// Exactly two tokens; deeper ancestry and parent classes are not
    /// consulted.
    Descendant(String, String),
}

impl Selector {
    /// Parse a selector string into one of the supported shapes.
    ///
    /// Surrounding whitespace is ignored. The whole input must match:
    /// partial matches like `a > b` are rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use qss::Selector;
    ///
    /// assert_eq!(Selector::parse("*").unwrap(), Selector::Universal);
    /// assert_eq!(
    ///     Selector::parse("h1 i").unwrap(),
    ///     Selector::Descendant("h1".into(), "i".into())
    /// );
    /// assert!(Selector::parse("a > b").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(SelectorError::Empty);
        }
        match parse_selector(trimmed) {
            Ok(("", selector)) => Ok(selector),
            _ => Err(SelectorError::Unsupported(input.to_string())),
        }
    }
}

fn parse_ident(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '-' || c == '_')(input)
}

fn parse_selector(input: &str) -> IResult<&str, Selector> {
    alt((
        map(char('*'), |_| Selector::Universal),
        map(preceded(char('.'), parse_ident), |class| {
            Selector::Class(class.to_string())
        }),
        parse_element_selector,
    ))(input)
}

/// Parses `element`, `element.class`, or the two-token `parent child`
/// descendant form.
fn parse_element_selector(input: &str) -> IResult<&str, Selector> {
    let (input, element) = parse_ident(input)?;

    let (input, class) = opt(preceded(char('.'), parse_ident))(input)?;
    if let Some(class) = class {
        return Ok((
            input,
            Selector::ElementClass(element.to_string(), class.to_string()),
        ));
    }

    let (input, child) = opt(preceded(multispace1, parse_ident))(input)?;
    match child {
        Some(child) => Ok((
            input,
            Selector::Descendant(element.to_string(), child.to_string()),
        )),
        None => Ok((input, Selector::Element(element.to_string()))),
    }
}
