//! Canonical prefix notation for expression trees.
//!
//! Operators render as `( <symbol> <child> ... )`, leaves as `X`, `Y` or
//! a constant with nine fractional digits. An empty slot renders as `_`,
//! so partially grown trees can be printed and read back as well.

use crate::error::{Result, TexgenError};
use crate::types::{BinaryOp, ExprNode, Slot, TernaryOp, UnaryOp};
use std::fmt;
use std::str::FromStr;

const EMPTY_SLOT: &str = "_";

impl fmt::Display for ExprNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            ExprNode::Constant(value) => return write!(f, "{:.9}", value),
            ExprNode::VarX => return f.write_str("X"),
            ExprNode::VarY => return f.write_str("Y"),
            ExprNode::Unary { op, .. } => op.symbol(),
            ExprNode::Binary { op, .. } => op.symbol(),
            ExprNode::Ternary { op, .. } => op.symbol(),
        };

        write!(f, "( {}", symbol)?;
        for slot in self.slots() {
            match slot {
                Some(child) => write!(f, " {}", child)?,
                None => write!(f, " {}", EMPTY_SLOT)?,
            }
        }
        f.write_str(" )")
    }
}

impl FromStr for ExprNode {
    type Err = TexgenError;

    fn from_str(s: &str) -> Result<Self> {
        let mut parser = Parser::new(s);
        let root = parser
            .parse_slot()?
            .ok_or_else(|| TexgenError::Parse("root cannot be an empty slot".to_string()))?;
        match parser.next_token() {
            None => Ok(*root),
            Some(token) => Err(TexgenError::Parse(format!(
                "unexpected trailing token '{}'",
                token
            ))),
        }
    }
}

enum Operator {
    Unary(UnaryOp),
    Binary(BinaryOp),
    Ternary(TernaryOp),
}

fn lookup_operator(symbol: &str) -> Option<Operator> {
    Some(match symbol {
        "Sine" => Operator::Unary(UnaryOp::Sine),
        "Cos" => Operator::Unary(UnaryOp::Cosine),
        "Atan" => Operator::Unary(UnaryOp::ArcTangent),
        "+" => Operator::Binary(BinaryOp::Add),
        "-" => Operator::Binary(BinaryOp::Subtract),
        "*" => Operator::Binary(BinaryOp::Multiply),
        "/" => Operator::Binary(BinaryOp::Divide),
        "Atan2" => Operator::Binary(BinaryOp::ArcTangent2),
        "SimplexNoise" => Operator::Binary(BinaryOp::Noise),
        "Lerp" => Operator::Ternary(TernaryOp::Lerp),
        _ => return None,
    })
}

struct Parser<'a> {
    tokens: std::str::SplitWhitespace<'a>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            tokens: input.split_whitespace(),
        }
    }

    fn next_token(&mut self) -> Option<&'a str> {
        self.tokens.next()
    }

    fn expect_token(&mut self) -> Result<&'a str> {
        self.next_token()
            .ok_or_else(|| TexgenError::Parse("unexpected end of input".to_string()))
    }

    fn parse_slot(&mut self) -> Result<Slot> {
        let token = self.expect_token()?;
        match token {
            EMPTY_SLOT => Ok(None),
            "X" => Ok(Some(Box::new(ExprNode::VarX))),
            "Y" => Ok(Some(Box::new(ExprNode::VarY))),
            "(" => self.parse_operator().map(|node| Some(Box::new(node))),
            ")" => Err(TexgenError::Parse("unexpected ')'".to_string())),
            literal => literal
                .parse::<f32>()
                .map(|value| Some(Box::new(ExprNode::Constant(value))))
                .map_err(|_| TexgenError::Parse(format!("unknown token '{}'", literal))),
        }
    }

    fn parse_operator(&mut self) -> Result<ExprNode> {
        let symbol = self.expect_token()?;
        let operator = lookup_operator(symbol)
            .ok_or_else(|| TexgenError::Parse(format!("unknown operator '{}'", symbol)))?;

        let node = match operator {
            Operator::Unary(op) => ExprNode::Unary {
                op,
                children: [self.parse_slot()?],
            },
            Operator::Binary(op) => ExprNode::Binary {
                op,
                children: [self.parse_slot()?, self.parse_slot()?],
            },
            Operator::Ternary(op) => ExprNode::Ternary {
                op,
                children: [self.parse_slot()?, self.parse_slot()?, self.parse_slot()?],
            },
        };

        match self.expect_token()? {
            ")" => Ok(node),
            other => Err(TexgenError::Parse(format!(
                "expected ')' after {} operands of '{}', found '{}'",
                node.arity(),
                symbol,
                other
            ))),
        }
    }
}
