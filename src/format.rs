//! Runtime rendering of log arguments.
//!
//! Format strings travel through the logging interfaces as plain data: the wrapper
//! rewrites them (splicing a level label in front) before handing them to a logger
//! without levels. Rendering therefore happens at runtime with printf-style verbs
//! rather than through `format_args!`.

use std::borrow::Cow;
use std::fmt::{self, Write};
use std::iter::Peekable;
use std::str::Chars;

/// A single, dynamically typed log argument.
///
/// Build values with `From` conversions, usually through the [`args!`](crate::args) macro.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
    Char(char),
    /// Any other value, already rendered through its `Display` implementation.
    Other(String),
}

impl Value {
    /// Captures any displayable value.
    pub fn display<T: fmt::Display + ?Sized>(value: &T) -> Value {
        Value::Other(value.to_string())
    }

    fn type_name(&self) -> &'static str {
        match self {
            Value::Str(_) => "string",
            Value::Int(_) => "int",
            Value::Uint(_) => "uint",
            Value::Float(_) => "float64",
            Value::Bool(_) => "bool",
            Value::Char(_) => "char",
            Value::Other(_) => "value",
        }
    }

    fn is_numeric(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Uint(_) | Value::Float(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) | Value::Other(s) => f.write_str(s),
            Value::Int(n) => write!(f, "{}", n),
            Value::Uint(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{}", x),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Char(c) => write!(f, "{}", c),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::Str(s.clone())
    }
}

impl From<Cow<'_, str>> for Value {
    fn from(s: Cow<'_, str>) -> Self {
        Value::Str(s.into_owned())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Char(c)
    }
}

impl From<fmt::Arguments<'_>> for Value {
    fn from(args: fmt::Arguments<'_>) -> Self {
        Value::Str(args.to_string())
    }
}

macro_rules! value_from {
    ($variant:ident as $wide:ty: $($t:ty),+) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::$variant(n as $wide)
                }
            }
        )+
    };
}

value_from!(Int as i64: i8, i16, i32, i64, isize);
value_from!(Uint as u64: u8, u16, u32, u64, usize);
value_from!(Float as f64: f32, f64);

/// Builds an array of [`Value`]s from heterogeneous expressions.
///
/// # Examples
///
/// ```
/// use unilogger::{args, Value};
/// let values = args!["disk", 3, true];
/// assert_eq!(values[1], Value::Int(3));
/// ```
#[macro_export]
macro_rules! args {
    () => {
        [] as [$crate::Value; 0]
    };
    ($($arg:expr),+ $(,)?) => {
        [$($crate::Value::from($arg)),+]
    };
}

/// Joins arguments with single spaces, each in its default representation.
///
/// No space is added after an argument that already ends in whitespace, so a
/// `"WARNING: "` label joins its message with exactly one space.
pub fn sprint(args: &[Value]) -> String {
    let mut out = String::new();
    for (i, arg) in args.iter().enumerate() {
        if i > 0 && !out.ends_with(char::is_whitespace) {
            out.push(' ');
        }
        let _ = write!(out, "{}", arg);
    }
    out
}

/// Renders `args` either through `format` or, without one, through [`sprint`].
pub fn render(format: Option<&str>, args: &[Value]) -> String {
    match format {
        Some(format) => sprintf(format, args),
        None => sprint(args),
    }
}

#[derive(Debug, Default)]
struct Spec {
    minus: bool,
    plus: bool,
    zero: bool,
    space: bool,
    sharp: bool,
    width: Option<usize>,
    precision: Option<usize>,
}

/// Printf-style substitution of `args` into `format`.
///
/// Supported verbs are `%v %s %d %x %X %o %b %q %c %t %f %F %e %E %g %G` and `%%`,
/// with the `- + 0 space #` flags, width and precision. Problems are rendered inline
/// instead of failing: `%!d(string=abc)` for a mismatched verb, `%!v(MISSING)` for a
/// missing argument, `%!(EXTRA int=1)` for leftovers, `%!(BADWIDTH)` or `%!(BADPREC)`
/// for a width or precision above one million.
///
/// # Examples
///
/// ```
/// use unilogger::{args, format::sprintf};
/// assert_eq!(sprintf("%s has %03d items", &args!["cart", 7]), "cart has 007 items");
/// assert_eq!(sprintf("%d", &args![]), "%!d(MISSING)");
/// ```
pub fn sprintf(format: &str, args: &[Value]) -> String {
    let mut out = String::with_capacity(format.len() + 8 * args.len());
    let mut next = 0;
    let mut chars = format.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        let mut spec = Spec::default();
        while let Some(&flag) = chars.peek() {
            match flag {
                '-' => spec.minus = true,
                '+' => spec.plus = true,
                '0' => spec.zero = true,
                ' ' => spec.space = true,
                '#' => spec.sharp = true,
                _ => break,
            }
            chars.next();
        }
        spec.width = digits(&mut chars);
        if spec.width.is_some_and(|w| w > MAX_WIDTH) {
            out.push_str("%!(BADWIDTH)");
            spec.width = None;
        }
        if chars.peek() == Some(&'.') {
            chars.next();
            spec.precision = Some(digits(&mut chars).unwrap_or(0));
            if spec.precision.is_some_and(|p| p > MAX_WIDTH) {
                out.push_str("%!(BADPREC)");
                spec.precision = None;
            }
        }

        let Some(verb) = chars.next() else {
            out.push_str("%!(NOVERB)");
            break;
        };
        if verb == '%' {
            out.push('%');
            continue;
        }

        match args.get(next) {
            Some(arg) => {
                next += 1;
                write_arg(&mut out, verb, &spec, arg);
            }
            None => {
                let _ = write!(out, "%!{}(MISSING)", verb);
            }
        }
    }

    if next < args.len() {
        out.push_str("%!(EXTRA ");
        for (i, arg) in args[next..].iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "{}={}", arg.type_name(), arg);
        }
        out.push(')');
    }
    out
}

/// Widths and precisions above this are rejected with an inline marker.
const MAX_WIDTH: usize = 1_000_000;

fn digits(chars: &mut Peekable<Chars<'_>>) -> Option<usize> {
    let mut value: Option<usize> = None;
    while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
        value = Some(value.unwrap_or(0).saturating_mul(10).saturating_add(d as usize));
        chars.next();
    }
    value
}

fn write_arg(out: &mut String, verb: char, spec: &Spec, arg: &Value) {
    let Some(body) = convert(verb, spec, arg) else {
        let _ = write!(out, "%!{}({}={})", verb, arg.type_name(), arg);
        return;
    };

    let numeric = arg.is_numeric() && !matches!(verb, 'c' | 'q' | 'v' | 's');
    let body = if numeric && !body.starts_with('-') {
        if spec.plus {
            format!("+{}", body)
        } else if spec.space {
            format!(" {}", body)
        } else {
            body
        }
    } else {
        body
    };

    pad(out, spec, numeric, &body);
}

fn convert(verb: char, spec: &Spec, arg: &Value) -> Option<String> {
    let text = match (verb, arg) {
        ('v', Value::Float(x)) | ('f' | 'F', Value::Float(x)) if spec.precision.is_some() || verb != 'v' => {
            format!("{:.*}", spec.precision.unwrap_or(6), x)
        }
        ('v' | 's', Value::Str(s)) => truncate(s, spec.precision),
        ('v' | 's', other) => truncate(&other.to_string(), spec.precision),
        ('d', Value::Int(n)) => n.to_string(),
        ('d', Value::Uint(n)) => n.to_string(),
        ('x' | 'X' | 'o' | 'b', Value::Int(n)) => {
            let digits = radix(verb, spec, n.unsigned_abs());
            if *n < 0 {
                format!("-{}", digits)
            } else {
                digits
            }
        }
        ('x' | 'X' | 'o' | 'b', Value::Uint(n)) => radix(verb, spec, *n),
        ('x', Value::Str(s)) => s.bytes().map(|b| format!("{:02x}", b)).collect(),
        ('X', Value::Str(s)) => s.bytes().map(|b| format!("{:02X}", b)).collect(),
        ('c', Value::Char(c)) => c.to_string(),
        ('c', Value::Int(n)) => code_point(u32::try_from(*n).ok()),
        ('c', Value::Uint(n)) => code_point(u32::try_from(*n).ok()),
        ('q', Value::Str(s)) => format!("{:?}", s),
        ('q', Value::Char(c)) => format!("{:?}", c),
        ('t', Value::Bool(b)) => b.to_string(),
        ('e' | 'E', Value::Float(x)) => {
            let text = exponent(&format!("{:.*e}", spec.precision.unwrap_or(6), x));
            if verb == 'E' {
                text.to_uppercase()
            } else {
                text
            }
        }
        ('g', Value::Float(x)) => x.to_string(),
        ('G', Value::Float(x)) => x.to_string().to_uppercase(),
        _ => return None,
    };
    Some(text)
}

fn radix(verb: char, spec: &Spec, n: u64) -> String {
    match (verb, spec.sharp) {
        ('x', false) => format!("{:x}", n),
        ('x', true) => format!("{:#x}", n),
        ('X', false) => format!("{:X}", n),
        ('X', true) => format!("0X{:X}", n),
        ('o', false) => format!("{:o}", n),
        ('o', true) => format!("0{:o}", n),
        (_, false) => format!("{:b}", n),
        (_, true) => format!("{:#b}", n),
    }
}

fn code_point(raw: Option<u32>) -> String {
    raw.and_then(char::from_u32)
        .unwrap_or(char::REPLACEMENT_CHARACTER)
        .to_string()
}

fn truncate(s: &str, precision: Option<usize>) -> String {
    match precision {
        Some(p) => s.chars().take(p).collect(),
        None => s.to_owned(),
    }
}

// Rust prints `1.5e3`, printf expects `1.5e+03`.
fn exponent(text: &str) -> String {
    match text.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => text.to_owned(),
    }
}

fn pad(out: &mut String, spec: &Spec, numeric: bool, body: &str) {
    let len = body.chars().count();
    let fill = spec.width.map_or(0, |w| w.saturating_sub(len));
    if fill == 0 {
        out.push_str(body);
        return;
    }

    if spec.minus {
        out.push_str(body);
        out.extend(std::iter::repeat(' ').take(fill));
    } else if spec.zero && numeric {
        let sign_len = usize::from(body.starts_with(|c| matches!(c, '-' | '+' | ' ')));
        let prefix_len = if body[sign_len..].starts_with("0x") || body[sign_len..].starts_with("0X") {
            sign_len + 2
        } else {
            sign_len
        };
        out.push_str(&body[..prefix_len]);
        out.extend(std::iter::repeat('0').take(fill));
        out.push_str(&body[prefix_len..]);
    } else {
        out.extend(std::iter::repeat(' ').take(fill));
        out.push_str(body);
    }
}
