use crate::error_handling::*;
use crate::scanning::*;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UnaryOperator {
    negative,
    positive,
}

impl UnaryOperator {
    pub fn call(&self, value: f64) -> f64 {
        use UnaryOperator::*;
        match self {
            positive => value,
            negative => -value,
        }
    }
}

impl FromStr for UnaryOperator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        use UnaryOperator::*;
        match s {
            "+" => Ok(positive),
            "-" => Ok(negative),
            _ => Err(CalcError::invalid_operator(s.into())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BinaryOperator {
    addition,
    subtraction,
    multiplication,
    division,
    remainder,
}

impl BinaryOperator {
    pub fn call(&self, left: f64, right: f64) -> f64 {
        use BinaryOperator::*;

        match self {
            addition => left + right,
            subtraction => left - right,
            multiplication => left * right,
            division => left / right,
            remainder => left % right,
        }
    }
}

impl FromStr for BinaryOperator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        use BinaryOperator::*;
        match s {
            "+" => Ok(addition),
            "-" => Ok(subtraction),
            "*" => Ok(multiplication),
            "/" => Ok(division),
            "%" => Ok(remainder),
            _ => Err(CalcError::invalid_operator(s.into())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operator {
    unary(UnaryOperator),
    binary(BinaryOperator),
}

pub enum Punctuation {
    paren,
}

pub enum StackNode {
    operator(Operator),
    punctuation(Punctuation),
}

impl StackNode {
    fn precedence(&self) -> i32 {
        use Operator::*;
        use BinaryOperator::*;
        match self {
            Self::punctuation(_) => 0,
            Self::operator(binary(operator)) =>
                match operator {
                    addition | subtraction => 1,
                    multiplication | division | remainder => 2,
                },
            Self::operator(unary(_)) => 3,
        }
    }
}

/// One step of a postfix (RPN) program.
#[derive(Clone, Debug, PartialEq)]
pub enum ExprNode {
    number(f64),
    operator(Operator),
}

pub struct Yard {
    expression: Vec<ExprNode>,
    stack: Vec<StackNode>,
}

impl Yard {
    pub fn new() -> Self {
        Self{expression: Vec::new(), stack: Vec::new()}
    }

    fn add_number(&mut self, content: &str) -> Result<()> {
        let value = content
            .parse()
            .map_err(|_| CalcError::invalid_number(content.into()))?;
        self.expression.push(ExprNode::number(value));
        Ok(())
    }

    fn pop_higher_operator(&mut self, precedence: i32) -> Option<Operator> {
        if self.stack.last().filter(|node| node.precedence() >= precedence).is_some() {
            match self.stack.pop() {
                Some(StackNode::operator(operator)) => Some(operator),
                _ => None,
            }
        } else {
            None
        }
    }

    fn add_binary_operator(&mut self, content: &str) -> Result<()> {
        let operator = StackNode::operator(Operator::binary(content.parse()?));

        let precedence = operator.precedence();
        while let Some(operator) = self.pop_higher_operator(precedence) {
            self.expression.push(ExprNode::operator(operator));
        }
        self.stack.push(operator);
        Ok(())
    }

    // Prefix operators have no left operand yet, so nothing is popped.
    fn add_unary_operator(&mut self, content: &str) -> Result<()> {
        self.stack.push(StackNode::operator(Operator::unary(content.parse()?)));
        Ok(())
    }

    fn add_left_paren(&mut self) {
        self.stack.push(StackNode::punctuation(Punctuation::paren));
    }

    fn add_right_paren(&mut self) -> Result<()> {
        while let Some(stack_node) = self.stack.pop() {
            match stack_node {
                StackNode::punctuation(Punctuation::paren) => return Ok(()),
                StackNode::operator(operator) => self.expression.push(ExprNode::operator(operator)),
            }
        }
        Err(CalcError::could_not_find("(".into()))
    }

    pub fn finish(mut self) -> Result<Vec<ExprNode>> {
        while let Some(stack_node) = self.stack.pop() {
            match stack_node {
                StackNode::punctuation(Punctuation::paren) => {
                    return Err(CalcError::could_not_find(")".into()));
                },
                StackNode::operator(operator) => self.expression.push(ExprNode::operator(operator)),
            }
        }
        Ok(self.expression)
    }
}

impl Default for Yard {
    fn default() -> Self {
        Self::new()
    }
}

/// Handles a token where an operand is expected. Returns true once one was read.
pub fn handle_edge(yard: &mut Yard, token: &Token) -> Result<bool> {
    use TokenKind::*;
    match token.kind {
        number => {
            yard.add_number(&token.content)?;
            Ok(true)
        },
        operator => {
            yard.add_unary_operator(&token.content)?;
            Ok(false)
        },
        punctuation => {
            match token.content.as_str() {
                "(" => yard.add_left_paren(),
                _ => return Err(CalcError::did_not_expect(token.content.clone())),
            }
            Ok(false)
        },
    }
}

/// Handles a token after an operand. Returns true when an operand is expected next.
pub fn handle_middle(yard: &mut Yard, token: &Token) -> Result<bool> {
    use TokenKind::*;
    match token.kind {
        operator => {
            yard.add_binary_operator(&token.content)?;
            Ok(true)
        },
        punctuation => {
            match token.content.as_str() {
                ")" => yard.add_right_paren()?,
                _ => return Err(CalcError::did_not_expect(token.content.clone())),
            }
            Ok(false)
        },
        number => Err(CalcError::did_not_expect(token.content.clone())),
    }
}

/// Converts normalized infix text into postfix order.
pub fn parse(expression_string: String) -> Result<Vec<ExprNode>> {
    let mut source = StringScanner::new(expression_string)?;

    let mut is_edge = true;
    let mut yard = Yard::new();

    while let Some(token) = source.get_current() {
        if is_edge {
            if handle_edge(&mut yard, &token)? {
                is_edge = false;
            }
        } else if handle_middle(&mut yard, &token)? {
            is_edge = true;
        }
        source.advance()?;
    }

    if is_edge {
        return Err(CalcError::abrupt_end);
    }
    yard.finish()
}
