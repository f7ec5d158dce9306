use std::cell::RefCell;
use std::collections::HashMap;
use std::io::{self, Write};
use std::rc::Rc;

use crate::class::{Class, Instance};
use crate::environment::Environment;
use crate::error::RuntimeError;
use crate::expr::{
    AssignData, BinaryData, CallData, Expr, ExprVisitor, GetData, GroupingData, LogicalData,
    SetData, SuperData, ThisData, UnaryData, VariableData,
};
use crate::function::{Function, NativeFunction};
use crate::literal::Literal;
use crate::object::{Callable, Object};
use crate::stmt::{
    BlockData, ClassData, ExpressionData, FunctionData, IfData, PrintData, ReturnData, Stmt,
    StmtVisitor, VarData, WhileData,
};
use crate::token::{Token, Type};

/// The outcome of executing a statement. `Return` unwinds every enclosing
/// block and loop up to the nearest function call without relying on Rust's
/// own panic/unwind machinery (spec.md §9, "result-returning mode on every
/// statement evaluator" — the alternative to an exception-shaped control
/// flow that this rewrite adopts).
pub enum Flow {
    Normal,
    Return(Object),
}

pub struct Interpreter {
    pub globals: Rc<RefCell<Environment>>,
    environment: Rc<RefCell<Environment>>,
    locals: HashMap<u64, usize>,
    output: Box<dyn Write>,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::with_output(Box::new(io::stdout()))
    }

    /// Builds an interpreter that writes `print` output to `output` instead
    /// of stdout, so the in-process test harness can assert on it.
    pub fn with_output(output: Box<dyn Write>) -> Self {
        let globals = Rc::new(RefCell::new(Environment::default()));

        for native in NativeFunction::get_globals() {
            globals.borrow_mut().define(&native.name.lexeme.clone(), Object::from(native));
        }

        Interpreter {
            globals: Rc::clone(&globals),
            environment: globals,
            locals: HashMap::new(),
            output,
        }
    }

    /// Records the scope distance the resolver computed for an expression
    /// node, keyed by the node's identity rather than its lexeme (spec.md
    /// §9, "Expression identity as a map key").
    pub fn resolve(&mut self, id: u64, depth: usize) {
        self.locals.insert(id, depth);
    }

    pub fn interpret(&mut self, statements: &[Stmt]) {
        for statement in statements {
            match self.execute(statement) {
                Ok(_) => {},
                Err(error) => {
                    use crate::error::Error;
                    error.throw();
                    return;
                },
            }
        }
    }

    fn execute(&mut self, stmt: &Stmt) -> Result<Flow, RuntimeError> {
        stmt.accept(self)
    }

    pub fn execute_block(
        &mut self,
        statements: &[Stmt],
        environment: Rc<RefCell<Environment>>,
    ) -> Result<Flow, RuntimeError> {
        let previous = mem_replace_environment(self, environment);

        let mut result = Ok(Flow::Normal);
        for statement in statements {
            match self.execute(statement) {
                Ok(Flow::Normal) => continue,
                Ok(Flow::Return(value)) => {
                    result = Ok(Flow::Return(value));
                    break;
                },
                Err(error) => {
                    result = Err(error);
                    break;
                },
            }
        }

        self.environment = previous;
        result
    }

    fn evaluate(&mut self, expr: &Expr) -> Result<Object, RuntimeError> {
        expr.accept(self)
    }

    fn look_up_variable(&self, name: &Token, id: u64) -> Result<Object, RuntimeError> {
        match self.locals.get(&id) {
            Some(&distance) => self.environment.borrow().get_at(distance, name),
            None => self.globals.borrow().get(name),
        }
    }
}

fn mem_replace_environment(interpreter: &mut Interpreter, new: Rc<RefCell<Environment>>) -> Rc<RefCell<Environment>> {
    std::mem::replace(&mut interpreter.environment, new)
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl ExprVisitor<Result<Object, RuntimeError>> for Interpreter {
    fn visit_literal_expr(&mut self, value: &Literal) -> Result<Object, RuntimeError> {
        Ok(Object::from(value.clone()))
    }

    fn visit_unary_expr(&mut self, data: &UnaryData) -> Result<Object, RuntimeError> {
        let right = self.evaluate(&data.expr)?;

        match data.operator.r#type {
            Type::Minus => (-right).ok_or_else(|| RuntimeError {
                token: data.operator.clone(),
                message: "Operand must be a number.".to_string(),
            }),
            Type::Bang => Ok(Object::from(!right.as_bool().unwrap_or(true))),
            _ => unreachable!("parser never produces a unary operator other than '-' or '!'"),
        }
    }

    fn visit_binary_expr(&mut self, data: &BinaryData) -> Result<Object, RuntimeError> {
        let left = self.evaluate(&data.left)?;
        let right = self.evaluate(&data.right)?;

        let number_error = || RuntimeError {
            token: data.operator.clone(),
            message: "Operands must be numbers.".to_string(),
        };

        match data.operator.r#type {
            Type::Greater => match (left, right) {
                (Object::Literal(l), Object::Literal(r)) => l.partial_cmp(&r)
                    .map(|ord| Object::from(ord.is_gt()))
                    .ok_or_else(number_error),
                _ => Err(number_error()),
            },
            Type::GreaterEqual => match (left, right) {
                (Object::Literal(l), Object::Literal(r)) => l.partial_cmp(&r)
                    .map(|ord| Object::from(ord.is_ge()))
                    .ok_or_else(number_error),
                _ => Err(number_error()),
            },
            Type::Less => match (left, right) {
                (Object::Literal(l), Object::Literal(r)) => l.partial_cmp(&r)
                    .map(|ord| Object::from(ord.is_lt()))
                    .ok_or_else(number_error),
                _ => Err(number_error()),
            },
            Type::LessEqual => match (left, right) {
                (Object::Literal(l), Object::Literal(r)) => l.partial_cmp(&r)
                    .map(|ord| Object::from(ord.is_le()))
                    .ok_or_else(number_error),
                _ => Err(number_error()),
            },
            Type::EqualEqual => Ok(Object::from(left == right)),
            Type::BangEqual => Ok(Object::from(left != right)),
            Type::Minus => (left - right).ok_or_else(number_error),
            Type::Slash => (left / right).ok_or_else(number_error),
            Type::Star => (left * right).ok_or_else(number_error),
            Type::Plus => (left + right).ok_or_else(|| RuntimeError {
                token: data.operator.clone(),
                message: "Operands must be two numbers or two strings.".to_string(),
            }),
            _ => unreachable!("parser never produces a binary operator outside the comparison/term/factor set"),
        }
    }

    fn visit_logical_expr(&mut self, data: &LogicalData) -> Result<Object, RuntimeError> {
        let left = self.evaluate(&data.left)?;

        let left_truthy = left.as_bool().unwrap_or(true);

        if data.operator.r#type == Type::Or {
            if left_truthy {
                return Ok(left);
            }
        } else if !left_truthy {
            return Ok(left);
        }

        self.evaluate(&data.right)
    }

    fn visit_grouping_expr(&mut self, data: &GroupingData) -> Result<Object, RuntimeError> {
        self.evaluate(&data.expr)
    }

    fn visit_variable_expr(&mut self, data: &VariableData) -> Result<Object, RuntimeError> {
        self.look_up_variable(&data.name, data.id)
    }

    fn visit_assign_expr(&mut self, data: &AssignData) -> Result<Object, RuntimeError> {
        let value = self.evaluate(&data.value)?;

        match self.locals.get(&data.id) {
            Some(&distance) => self.environment.borrow_mut().assign_at(distance, &data.name, value.clone()),
            None => self.globals.borrow_mut().assign(&data.name, value.clone())?,
        }

        Ok(value)
    }

    fn visit_call_expr(&mut self, data: &CallData) -> Result<Object, RuntimeError> {
        let callee = self.evaluate(&data.callee)?;

        let mut arguments = Vec::with_capacity(data.arguments.len());
        for argument in &data.arguments {
            arguments.push(self.evaluate(argument)?);
        }

        let arity = match &callee {
            Object::Function(function) => function.arity(),
            Object::NativeFunction(native) => native.arity(),
            Object::Class(class) => class.borrow().arity(),
            _ => {
                return Err(RuntimeError {
                    token: data.paren.clone(),
                    message: "Can only call functions and classes.".to_string(),
                });
            },
        };

        if arguments.len() != arity {
            return Err(RuntimeError {
                token: data.paren.clone(),
                message: format!("Expected {arity} arguments but got {}.", arguments.len()),
            });
        }

        match &callee {
            Object::Function(function) => function.call(self, arguments),
            Object::NativeFunction(native) => native.call(self, arguments),
            Object::Class(class) => {
                let class = Rc::clone(class);
                class.borrow().call(self, arguments)
            },
            _ => unreachable!("arity check above already rejected non-callables"),
        }
    }

    fn visit_get_expr(&mut self, data: &GetData) -> Result<Object, RuntimeError> {
        let object = self.evaluate(&data.object)?;

        match &object {
            Object::Instance(instance) => instance.borrow().get(&data.name, &object),
            _ => Err(RuntimeError {
                token: data.name.clone(),
                message: "Only instances have properties.".to_string(),
            }),
        }
    }

    fn visit_set_expr(&mut self, data: &SetData) -> Result<Object, RuntimeError> {
        let object = self.evaluate(&data.object)?;

        match object {
            Object::Instance(instance) => {
                let value = self.evaluate(&data.value)?;
                instance.borrow_mut().set(&data.name, value.clone());
                Ok(value)
            },
            _ => Err(RuntimeError {
                token: data.name.clone(),
                message: "Only instances have fields.".to_string(),
            }),
        }
    }

    fn visit_this_expr(&mut self, data: &ThisData) -> Result<Object, RuntimeError> {
        self.look_up_variable(&data.keyword, data.id)
    }

    fn visit_super_expr(&mut self, data: &SuperData) -> Result<Object, RuntimeError> {
        let distance = *self.locals.get(&data.id)
            .expect("resolver to have recorded a distance for every 'super' expression");

        let superclass = self.environment.borrow().get_at(distance, &data.keyword)?;
        let Object::Class(superclass) = superclass else {
            unreachable!("'super' always resolves to a class");
        };

        let object = self.environment.borrow().get_at(
            distance - 1,
            &Token::new(Type::This, "this".to_string(), None, data.keyword.location),
        )?;

        match superclass.borrow().get_method(&data.method.lexeme) {
            Some(method) => Ok(Object::from(method.bind(object))),
            None => Err(RuntimeError {
                token: data.method.clone(),
                message: format!("Undefined property '{}'.", data.method.lexeme),
            }),
        }
    }
}

impl StmtVisitor<Result<Flow, RuntimeError>> for Interpreter {
    fn visit_expression_stmt(&mut self, data: &ExpressionData) -> Result<Flow, RuntimeError> {
        self.evaluate(&data.expr)?;
        Ok(Flow::Normal)
    }

    fn visit_print_stmt(&mut self, data: &PrintData) -> Result<Flow, RuntimeError> {
        let value = self.evaluate(&data.expr)?;
        writeln!(self.output, "{value}").expect("writing to the configured output to succeed");
        Ok(Flow::Normal)
    }

    fn visit_var_stmt(&mut self, data: &VarData) -> Result<Flow, RuntimeError> {
        let value = match &data.initializer {
            Some(expr) => self.evaluate(expr)?,
            None => Object::from(Literal::Nil),
        };

        self.environment.borrow_mut().define(&data.name.lexeme, value);
        Ok(Flow::Normal)
    }

    fn visit_block_stmt(&mut self, data: &BlockData) -> Result<Flow, RuntimeError> {
        let scope = Environment::new(Some(Rc::clone(&self.environment)));
        self.execute_block(&data.statements, Rc::new(RefCell::new(scope)))
    }

    fn visit_if_stmt(&mut self, data: &IfData) -> Result<Flow, RuntimeError> {
        let condition = self.evaluate(&data.condition)?;

        if condition.as_bool().unwrap_or(true) {
            self.execute(&data.then_branch)
        } else if let Some(else_branch) = &data.else_branch {
            self.execute(else_branch)
        } else {
            Ok(Flow::Normal)
        }
    }

    fn visit_while_stmt(&mut self, data: &WhileData) -> Result<Flow, RuntimeError> {
        while self.evaluate(&data.condition)?.as_bool().unwrap_or(true) {
            match self.execute(&data.body)? {
                Flow::Normal => continue,
                Flow::Return(value) => return Ok(Flow::Return(value)),
            }
        }

        Ok(Flow::Normal)
    }

    fn visit_function_stmt(&mut self, data: &FunctionData) -> Result<Flow, RuntimeError> {
        let function = Function::new(
            data.name.clone(),
            data.params.clone(),
            data.body.clone(),
            Rc::clone(&self.environment),
            false,
        );

        self.environment.borrow_mut().define(&data.name.lexeme, Object::from(function));
        Ok(Flow::Normal)
    }

    fn visit_return_stmt(&mut self, data: &ReturnData) -> Result<Flow, RuntimeError> {
        let value = match &data.value {
            Some(expr) => self.evaluate(expr)?,
            None => Object::from(Literal::Nil),
        };

        Ok(Flow::Return(value))
    }

    fn visit_class_stmt(&mut self, data: &ClassData) -> Result<Flow, RuntimeError> {
        let superclass = match &data.superclass {
            Some(expr) => {
                let value = self.evaluate(expr)?;
                match value {
                    Object::Class(class) => Some(class),
                    _ => {
                        let Expr::Variable(variable) = expr else {
                            unreachable!("parser only ever produces a Variable superclass expression");
                        };
                        return Err(RuntimeError {
                            token: variable.name.clone(),
                            message: "Superclass must be a class.".to_string(),
                        });
                    },
                }
            },
            None => None,
        };

        self.environment.borrow_mut().define(&data.name.lexeme, Object::from(Literal::Nil));

        let previous = Rc::clone(&self.environment);
        if let Some(superclass) = &superclass {
            let mut super_scope = Environment::new(Some(Rc::clone(&self.environment)));
            super_scope.define("super", Object::from(Rc::clone(superclass)));
            self.environment = Rc::new(RefCell::new(super_scope));
        }

        let mut methods = HashMap::new();
        for method in &data.methods {
            let Stmt::Function(function_data) = method else {
                unreachable!("parser only ever produces Function statements in a class body");
            };

            let is_initializer = function_data.name.lexeme == "init";
            let function = Function::new(
                function_data.name.clone(),
                function_data.params.clone(),
                function_data.body.clone(),
                Rc::clone(&self.environment),
                is_initializer,
            );
            methods.insert(function_data.name.lexeme.clone(), function);
        }

        let class = Class::new(data.name.lexeme.clone(), superclass, methods);

        if data.superclass.is_some() {
            self.environment = previous;
        }

        self.environment.borrow_mut().assign(&data.name, Object::from(Rc::new(RefCell::new(class))))?;
        Ok(Flow::Normal)
    }
}
