#![allow(dead_code)]

use std::sync::atomic::{AtomicU64, Ordering};

use crate::literal::Literal;
use crate::token::Token;

/// Monotonic id generator backing expression-node identity (spec.md §9,
/// "Expression identity as a map key"). Only the expression kinds the
/// resolver records into the locals table (`Variable`, `Assign`, `This`,
/// `Super`) carry one; every other expression kind never needs a lookup.
static NEXT_EXPR_ID: AtomicU64 = AtomicU64::new(0);

pub fn next_expr_id() -> u64 {
    NEXT_EXPR_ID.fetch_add(1, Ordering::Relaxed)
}

#[derive(Debug, Clone)]
pub struct UnaryData {
    pub operator: Token,
    pub expr: Box<Expr>,
}

#[derive(Debug, Clone)]
pub struct BinaryData {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
}

#[derive(Debug, Clone)]
pub struct LogicalData {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
}

#[derive(Debug, Clone)]
pub struct GroupingData {
    pub expr: Box<Expr>,
}

#[derive(Debug, Clone)]
pub struct VariableData {
    pub id: u64,
    pub name: Token,
}

impl VariableData {
    pub fn new(name: Token) -> Self {
        VariableData { id: next_expr_id(), name }
    }
}

#[derive(Debug, Clone)]
pub struct AssignData {
    pub id: u64,
    pub name: Token,
    pub value: Box<Expr>,
}

impl AssignData {
    pub fn new(name: Token, value: Box<Expr>) -> Self {
        AssignData { id: next_expr_id(), name, value }
    }
}

#[derive(Debug, Clone)]
pub struct CallData {
    pub callee: Box<Expr>,
    pub paren: Token,
    pub arguments: Vec<Expr>,
}

#[derive(Debug, Clone)]
pub struct GetData {
    pub object: Box<Expr>,
    pub name: Token,
}

#[derive(Debug, Clone)]
pub struct SetData {
    pub object: Box<Expr>,
    pub name: Token,
    pub value: Box<Expr>,
}

#[derive(Debug, Clone)]
pub struct ThisData {
    pub id: u64,
    pub keyword: Token,
}

impl ThisData {
    pub fn new(keyword: Token) -> Self {
        ThisData { id: next_expr_id(), keyword }
    }
}

#[derive(Debug, Clone)]
pub struct SuperData {
    pub id: u64,
    pub keyword: Token,
    pub method: Token,
}

impl SuperData {
    pub fn new(keyword: Token, method: Token) -> Self {
        SuperData { id: next_expr_id(), keyword, method }
    }
}

/// An expression: a piece of code that produces an [`Object`](crate::object::Object).
#[derive(Debug, Clone)]
pub enum Expr {
    Literal(Literal),
    Unary(UnaryData),
    Binary(BinaryData),
    Logical(LogicalData),
    Grouping(GroupingData),
    Variable(VariableData),
    Assign(AssignData),
    Call(CallData),
    Get(GetData),
    Set(SetData),
    This(ThisData),
    Super(SuperData),
}

impl Expr {
    /// Accepts a visitor and returns the result of the visit.
    pub fn accept<T>(&self, visitor: &mut dyn ExprVisitor<T>) -> T {
        match self {
            Expr::Literal(value) => visitor.visit_literal_expr(value),
            Expr::Unary(data) => visitor.visit_unary_expr(data),
            Expr::Binary(data) => visitor.visit_binary_expr(data),
            Expr::Logical(data) => visitor.visit_logical_expr(data),
            Expr::Grouping(data) => visitor.visit_grouping_expr(data),
            Expr::Variable(data) => visitor.visit_variable_expr(data),
            Expr::Assign(data) => visitor.visit_assign_expr(data),
            Expr::Call(data) => visitor.visit_call_expr(data),
            Expr::Get(data) => visitor.visit_get_expr(data),
            Expr::Set(data) => visitor.visit_set_expr(data),
            Expr::This(data) => visitor.visit_this_expr(data),
            Expr::Super(data) => visitor.visit_super_expr(data),
        }
    }
}

pub trait ExprVisitor<T> {
    fn visit_literal_expr(&mut self, value: &Literal) -> T;
    fn visit_unary_expr(&mut self, data: &UnaryData) -> T;
    fn visit_binary_expr(&mut self, data: &BinaryData) -> T;
    fn visit_logical_expr(&mut self, data: &LogicalData) -> T;
    fn visit_grouping_expr(&mut self, data: &GroupingData) -> T;
    fn visit_variable_expr(&mut self, data: &VariableData) -> T;
    fn visit_assign_expr(&mut self, data: &AssignData) -> T;
    fn visit_call_expr(&mut self, data: &CallData) -> T;
    fn visit_get_expr(&mut self, data: &GetData) -> T;
    fn visit_set_expr(&mut self, data: &SetData) -> T;
    fn visit_this_expr(&mut self, data: &ThisData) -> T;
    fn visit_super_expr(&mut self, data: &SuperData) -> T;
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::token::{Location, Type};

    #[test]
    fn variable_expressions_get_distinct_ids() {
        let name = Token::new(Type::Identifier, "a".to_string(), None, Location::new(1));
        let first = VariableData::new(name.clone());
        let second = VariableData::new(name);

        assert_ne!(first.id, second.id);
    }
}
