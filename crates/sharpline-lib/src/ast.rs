//! Typed AST layer over the CST.
//!
//! Thin wrappers that provide structured access to CST nodes. Accessors return
//! `Option` because a tree produced by a grammar with stand-in rules may carry
//! bare tokens where a full grammar would produce nodes.

use sharpline_core::{SyntaxKind, SyntaxNode, SyntaxToken};

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl $name {
            pub fn cast(node: SyntaxNode) -> Option<Self> {
                (node.kind() == SyntaxKind::$kind).then(|| Self(node))
            }

            pub fn syntax(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

ast_node!(Root, Root);
ast_node!(Literal, Literal);
ast_node!(SimpleName, SimpleName);
ast_node!(TypeArgumentList, TypeArgumentList);
ast_node!(PredefinedType, PredefinedType);
ast_node!(NamedType, NamedType);
ast_node!(NullableType, NullableType);
ast_node!(ArrayType, ArrayType);
ast_node!(QualifiedAliasMember, QualifiedAliasMember);
ast_node!(ThisExpr, ThisExpr);
ast_node!(BaseAccess, BaseAccess);
ast_node!(ParenExpr, ParenExpr);
ast_node!(MemberAccess, MemberAccess);
ast_node!(InvocationExpr, InvocationExpr);
ast_node!(ElementAccess, ElementAccess);
ast_node!(PostIncrementExpr, PostIncrementExpr);
ast_node!(PostDecrementExpr, PostDecrementExpr);
ast_node!(ArgumentList, ArgumentList);
ast_node!(BracketedArgumentList, BracketedArgumentList);
ast_node!(Argument, Argument);
ast_node!(TypeofExpr, TypeofExpr);
ast_node!(SizeofExpr, SizeofExpr);
ast_node!(DefaultValueExpr, DefaultValueExpr);
ast_node!(CheckedExpr, CheckedExpr);
ast_node!(UncheckedExpr, UncheckedExpr);
ast_node!(PrefixUnaryExpr, PrefixUnaryExpr);
ast_node!(CastExpr, CastExpr);
ast_node!(BinaryExpr, BinaryExpr);
ast_node!(IsExpr, IsExpr);
ast_node!(AsExpr, AsExpr);
ast_node!(ConditionalExpr, ConditionalExpr);
ast_node!(AssignmentExpr, AssignmentExpr);
ast_node!(LambdaExpr, LambdaExpr);
ast_node!(AnonymousMethodExpr, AnonymousMethodExpr);
ast_node!(ParameterList, ParameterList);
ast_node!(Parameter, Parameter);
ast_node!(Block, Block);
ast_node!(QueryExpr, QueryExpr);
ast_node!(FromClause, FromClause);
ast_node!(QueryBody, QueryBody);
ast_node!(LetClause, LetClause);
ast_node!(WhereClause, WhereClause);
ast_node!(JoinClause, JoinClause);
ast_node!(JoinIntoClause, JoinIntoClause);
ast_node!(OrderByClause, OrderByClause);
ast_node!(Ordering, Ordering);
ast_node!(SelectClause, SelectClause);
ast_node!(GroupClause, GroupClause);
ast_node!(QueryContinuation, QueryContinuation);
ast_node!(ObjectCreationExpr, ObjectCreationExpr);
ast_node!(ArrayCreationExpr, ArrayCreationExpr);
ast_node!(ImplicitArrayCreationExpr, ImplicitArrayCreationExpr);
ast_node!(AnonymousObjectCreationExpr, AnonymousObjectCreationExpr);
ast_node!(ObjectInitializer, ObjectInitializer);
ast_node!(MemberInitializer, MemberInitializer);
ast_node!(CollectionInitializer, CollectionInitializer);
ast_node!(ArrayInitializer, ArrayInitializer);
ast_node!(MemberDeclarator, MemberDeclarator);

fn tokens(node: &SyntaxNode) -> impl Iterator<Item = SyntaxToken> + '_ {
    node.children_with_tokens()
        .filter_map(|it| it.into_token())
        .filter(|t| !t.kind().is_trivia())
}

fn token_of(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
    tokens(node).find(|t| t.kind() == kind)
}

/// Operator punctuation among the direct children, in source order.
fn operator_kinds(node: &SyntaxNode) -> Vec<SyntaxKind> {
    tokens(node)
        .map(|t| t.kind())
        .filter(|kind| *kind < SyntaxKind::IntegerLiteral)
        .collect()
}

fn exprs(node: &SyntaxNode) -> impl Iterator<Item = Expr> + '_ {
    node.children().filter_map(Expr::cast)
}

/// Any node that can stand where an expression is expected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Literal(Literal),
    SimpleName(SimpleName),
    PredefinedType(PredefinedType),
    QualifiedAliasMember(QualifiedAliasMember),
    This(ThisExpr),
    BaseAccess(BaseAccess),
    Paren(ParenExpr),
    MemberAccess(MemberAccess),
    Invocation(InvocationExpr),
    ElementAccess(ElementAccess),
    PostIncrement(PostIncrementExpr),
    PostDecrement(PostDecrementExpr),
    Typeof(TypeofExpr),
    Sizeof(SizeofExpr),
    DefaultValue(DefaultValueExpr),
    Checked(CheckedExpr),
    Unchecked(UncheckedExpr),
    PrefixUnary(PrefixUnaryExpr),
    Cast(CastExpr),
    Binary(BinaryExpr),
    Is(IsExpr),
    As(AsExpr),
    Conditional(ConditionalExpr),
    Assignment(AssignmentExpr),
    Lambda(LambdaExpr),
    AnonymousMethod(AnonymousMethodExpr),
    Query(QueryExpr),
    ObjectCreation(ObjectCreationExpr),
    ArrayCreation(ArrayCreationExpr),
    ImplicitArrayCreation(ImplicitArrayCreationExpr),
    AnonymousObjectCreation(AnonymousObjectCreationExpr),
}

impl Expr {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::Literal => Literal::cast(node).map(Expr::Literal),
            SyntaxKind::SimpleName => SimpleName::cast(node).map(Expr::SimpleName),
            SyntaxKind::PredefinedType => PredefinedType::cast(node).map(Expr::PredefinedType),
            SyntaxKind::QualifiedAliasMember => {
                QualifiedAliasMember::cast(node).map(Expr::QualifiedAliasMember)
            }
            SyntaxKind::ThisExpr => ThisExpr::cast(node).map(Expr::This),
            SyntaxKind::BaseAccess => BaseAccess::cast(node).map(Expr::BaseAccess),
            SyntaxKind::ParenExpr => ParenExpr::cast(node).map(Expr::Paren),
            SyntaxKind::MemberAccess => MemberAccess::cast(node).map(Expr::MemberAccess),
            SyntaxKind::InvocationExpr => InvocationExpr::cast(node).map(Expr::Invocation),
            SyntaxKind::ElementAccess => ElementAccess::cast(node).map(Expr::ElementAccess),
            SyntaxKind::PostIncrementExpr => {
                PostIncrementExpr::cast(node).map(Expr::PostIncrement)
            }
            SyntaxKind::PostDecrementExpr => {
                PostDecrementExpr::cast(node).map(Expr::PostDecrement)
            }
            SyntaxKind::TypeofExpr => TypeofExpr::cast(node).map(Expr::Typeof),
            SyntaxKind::SizeofExpr => SizeofExpr::cast(node).map(Expr::Sizeof),
            SyntaxKind::DefaultValueExpr => DefaultValueExpr::cast(node).map(Expr::DefaultValue),
            SyntaxKind::CheckedExpr => CheckedExpr::cast(node).map(Expr::Checked),
            SyntaxKind::UncheckedExpr => UncheckedExpr::cast(node).map(Expr::Unchecked),
            SyntaxKind::PrefixUnaryExpr => PrefixUnaryExpr::cast(node).map(Expr::PrefixUnary),
            SyntaxKind::CastExpr => CastExpr::cast(node).map(Expr::Cast),
            SyntaxKind::BinaryExpr => BinaryExpr::cast(node).map(Expr::Binary),
            SyntaxKind::IsExpr => IsExpr::cast(node).map(Expr::Is),
            SyntaxKind::AsExpr => AsExpr::cast(node).map(Expr::As),
            SyntaxKind::ConditionalExpr => ConditionalExpr::cast(node).map(Expr::Conditional),
            SyntaxKind::AssignmentExpr => AssignmentExpr::cast(node).map(Expr::Assignment),
            SyntaxKind::LambdaExpr => LambdaExpr::cast(node).map(Expr::Lambda),
            SyntaxKind::AnonymousMethodExpr => {
                AnonymousMethodExpr::cast(node).map(Expr::AnonymousMethod)
            }
            SyntaxKind::QueryExpr => QueryExpr::cast(node).map(Expr::Query),
            SyntaxKind::ObjectCreationExpr => {
                ObjectCreationExpr::cast(node).map(Expr::ObjectCreation)
            }
            SyntaxKind::ArrayCreationExpr => ArrayCreationExpr::cast(node).map(Expr::ArrayCreation),
            SyntaxKind::ImplicitArrayCreationExpr => {
                ImplicitArrayCreationExpr::cast(node).map(Expr::ImplicitArrayCreation)
            }
            SyntaxKind::AnonymousObjectCreationExpr => {
                AnonymousObjectCreationExpr::cast(node).map(Expr::AnonymousObjectCreation)
            }
            _ => None,
        }
    }

    pub fn syntax(&self) -> &SyntaxNode {
        match self {
            Expr::Literal(n) => n.syntax(),
            Expr::SimpleName(n) => n.syntax(),
            Expr::PredefinedType(n) => n.syntax(),
            Expr::QualifiedAliasMember(n) => n.syntax(),
            Expr::This(n) => n.syntax(),
            Expr::BaseAccess(n) => n.syntax(),
            Expr::Paren(n) => n.syntax(),
            Expr::MemberAccess(n) => n.syntax(),
            Expr::Invocation(n) => n.syntax(),
            Expr::ElementAccess(n) => n.syntax(),
            Expr::PostIncrement(n) => n.syntax(),
            Expr::PostDecrement(n) => n.syntax(),
            Expr::Typeof(n) => n.syntax(),
            Expr::Sizeof(n) => n.syntax(),
            Expr::DefaultValue(n) => n.syntax(),
            Expr::Checked(n) => n.syntax(),
            Expr::Unchecked(n) => n.syntax(),
            Expr::PrefixUnary(n) => n.syntax(),
            Expr::Cast(n) => n.syntax(),
            Expr::Binary(n) => n.syntax(),
            Expr::Is(n) => n.syntax(),
            Expr::As(n) => n.syntax(),
            Expr::Conditional(n) => n.syntax(),
            Expr::Assignment(n) => n.syntax(),
            Expr::Lambda(n) => n.syntax(),
            Expr::AnonymousMethod(n) => n.syntax(),
            Expr::Query(n) => n.syntax(),
            Expr::ObjectCreation(n) => n.syntax(),
            Expr::ArrayCreation(n) => n.syntax(),
            Expr::ImplicitArrayCreation(n) => n.syntax(),
            Expr::AnonymousObjectCreation(n) => n.syntax(),
        }
    }
}

/// Type syntax as it appears in casts, `is`/`as`, `new` and parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    Predefined(PredefinedType),
    Named(NamedType),
    Nullable(NullableType),
    Array(ArrayType),
}

impl TypeRef {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::PredefinedType => PredefinedType::cast(node).map(TypeRef::Predefined),
            SyntaxKind::NamedType => NamedType::cast(node).map(TypeRef::Named),
            SyntaxKind::NullableType => NullableType::cast(node).map(TypeRef::Nullable),
            SyntaxKind::ArrayType => ArrayType::cast(node).map(TypeRef::Array),
            _ => None,
        }
    }

    pub fn syntax(&self) -> &SyntaxNode {
        match self {
            TypeRef::Predefined(n) => n.syntax(),
            TypeRef::Named(n) => n.syntax(),
            TypeRef::Nullable(n) => n.syntax(),
            TypeRef::Array(n) => n.syntax(),
        }
    }
}

impl Root {
    pub fn expr(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }
}

impl Literal {
    pub fn token(&self) -> Option<SyntaxToken> {
        tokens(&self.0).next()
    }
}

impl SimpleName {
    pub fn name(&self) -> Option<SyntaxToken> {
        token_of(&self.0, SyntaxKind::Id)
    }

    pub fn type_arguments(&self) -> Option<TypeArgumentList> {
        self.0.children().find_map(TypeArgumentList::cast)
    }
}

impl TypeArgumentList {
    pub fn types(&self) -> impl Iterator<Item = TypeRef> + '_ {
        self.0.children().filter_map(TypeRef::cast)
    }
}

impl PredefinedType {
    pub fn keyword(&self) -> Option<SyntaxToken> {
        tokens(&self.0).next()
    }
}

impl NullableType {
    pub fn inner(&self) -> Option<TypeRef> {
        self.0.children().find_map(TypeRef::cast)
    }
}

impl ArrayType {
    pub fn element_type(&self) -> Option<TypeRef> {
        self.0.children().find_map(TypeRef::cast)
    }

    /// Number of rank specifiers: `int[][,]` has two.
    pub fn rank_count(&self) -> usize {
        self.0
            .children()
            .filter(|n| n.kind() == SyntaxKind::RankSpecifier)
            .count()
    }
}

impl ParenExpr {
    pub fn inner(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }
}

impl MemberAccess {
    pub fn receiver(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }

    pub fn member(&self) -> Option<SimpleName> {
        self.0.children().filter_map(SimpleName::cast).last()
    }
}

impl InvocationExpr {
    pub fn callee(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }

    pub fn arguments(&self) -> Option<ArgumentList> {
        self.0.children().find_map(ArgumentList::cast)
    }
}

impl ElementAccess {
    pub fn receiver(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }

    pub fn arguments(&self) -> Option<BracketedArgumentList> {
        self.0.children().find_map(BracketedArgumentList::cast)
    }
}

impl ArgumentList {
    pub fn arguments(&self) -> impl Iterator<Item = Argument> + '_ {
        self.0.children().filter_map(Argument::cast)
    }
}

impl BracketedArgumentList {
    pub fn arguments(&self) -> impl Iterator<Item = Argument> + '_ {
        self.0.children().filter_map(Argument::cast)
    }
}

impl Argument {
    /// `name` in `name: value`.
    pub fn name(&self) -> Option<SyntaxToken> {
        token_of(&self.0, SyntaxKind::Colon)?;
        token_of(&self.0, SyntaxKind::Id)
    }

    pub fn modifier(&self) -> Option<SyntaxToken> {
        tokens(&self.0).find(|t| matches!(t.kind(), SyntaxKind::KwRef | SyntaxKind::KwOut))
    }

    pub fn value(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Plus,
    Minus,
    Not,
    BitNot,
    PreIncrement,
    PreDecrement,
}

impl PrefixUnaryExpr {
    pub fn op(&self) -> Option<UnaryOp> {
        let op = match tokens(&self.0).next()?.kind() {
            SyntaxKind::Plus => UnaryOp::Plus,
            SyntaxKind::Minus => UnaryOp::Minus,
            SyntaxKind::Bang => UnaryOp::Not,
            SyntaxKind::Tilde => UnaryOp::BitNot,
            SyntaxKind::PlusPlus => UnaryOp::PreIncrement,
            SyntaxKind::MinusMinus => UnaryOp::PreDecrement,
            _ => return None,
        };
        Some(op)
    }

    pub fn operand(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }
}

impl CastExpr {
    pub fn ty(&self) -> Option<TypeRef> {
        self.0.children().find_map(TypeRef::cast)
    }

    pub fn operand(&self) -> Option<Expr> {
        // the type may itself cast as an expression (`PredefinedType`)
        self.0.children().skip(1).find_map(Expr::cast)
    }
}

/// Binary operators, loosest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Coalesce,
    LogicalOr,
    LogicalAnd,
    BitOr,
    BitXor,
    BitAnd,
    Eq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    ShiftLeft,
    ShiftRight,
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

impl BinaryOp {
    fn from_kinds(kinds: &[SyntaxKind]) -> Option<Self> {
        use SyntaxKind::*;
        let op = match kinds {
            [QuestionQuestion] => BinaryOp::Coalesce,
            [PipePipe] => BinaryOp::LogicalOr,
            [AmpAmp] => BinaryOp::LogicalAnd,
            [Pipe] => BinaryOp::BitOr,
            [Caret] => BinaryOp::BitXor,
            [Amp] => BinaryOp::BitAnd,
            [EqEq] => BinaryOp::Eq,
            [BangEq] => BinaryOp::NotEq,
            [Lt] => BinaryOp::Lt,
            [Gt] => BinaryOp::Gt,
            [LtEq] => BinaryOp::LtEq,
            [GtEq] => BinaryOp::GtEq,
            [LtLt] => BinaryOp::ShiftLeft,
            [Gt, Gt] => BinaryOp::ShiftRight,
            [Plus] => BinaryOp::Add,
            [Minus] => BinaryOp::Sub,
            [Star] => BinaryOp::Mul,
            [Slash] => BinaryOp::Div,
            [Percent] => BinaryOp::Rem,
            _ => return None,
        };
        Some(op)
    }

    /// Binding strength; larger binds tighter. Relational operators share
    /// their level with `is` and `as`.
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOp::Coalesce => 1,
            BinaryOp::LogicalOr => 2,
            BinaryOp::LogicalAnd => 3,
            BinaryOp::BitOr => 4,
            BinaryOp::BitXor => 5,
            BinaryOp::BitAnd => 6,
            BinaryOp::Eq | BinaryOp::NotEq => 7,
            BinaryOp::Lt | BinaryOp::Gt | BinaryOp::LtEq | BinaryOp::GtEq => 8,
            BinaryOp::ShiftLeft | BinaryOp::ShiftRight => 9,
            BinaryOp::Add | BinaryOp::Sub => 10,
            BinaryOp::Mul | BinaryOp::Div | BinaryOp::Rem => 11,
        }
    }

    pub fn is_right_associative(self) -> bool {
        self == BinaryOp::Coalesce
    }
}

impl BinaryExpr {
    pub fn op(&self) -> Option<BinaryOp> {
        BinaryOp::from_kinds(&operator_kinds(&self.0))
    }

    pub fn lhs(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }

    pub fn rhs(&self) -> Option<Expr> {
        exprs(&self.0).nth(1)
    }
}

impl IsExpr {
    pub fn operand(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }

    pub fn ty(&self) -> Option<TypeRef> {
        self.0.children().skip(1).find_map(TypeRef::cast)
    }
}

impl AsExpr {
    pub fn operand(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }

    pub fn ty(&self) -> Option<TypeRef> {
        self.0.children().skip(1).find_map(TypeRef::cast)
    }
}

impl ConditionalExpr {
    pub fn condition(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }

    pub fn when_true(&self) -> Option<Expr> {
        exprs(&self.0).nth(1)
    }

    pub fn when_false(&self) -> Option<Expr> {
        exprs(&self.0).nth(2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssignOp {
    Assign,
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    BitAnd,
    BitOr,
    BitXor,
    ShiftLeft,
    ShiftRight,
}

impl AssignmentExpr {
    pub fn op(&self) -> Option<AssignOp> {
        use SyntaxKind::*;
        let op = match operator_kinds(&self.0).as_slice() {
            [Eq] => AssignOp::Assign,
            [PlusEq] => AssignOp::Add,
            [MinusEq] => AssignOp::Sub,
            [StarEq] => AssignOp::Mul,
            [SlashEq] => AssignOp::Div,
            [PercentEq] => AssignOp::Rem,
            [AmpEq] => AssignOp::BitAnd,
            [PipeEq] => AssignOp::BitOr,
            [CaretEq] => AssignOp::BitXor,
            [LtLtEq] => AssignOp::ShiftLeft,
            [Gt, GtEq] => AssignOp::ShiftRight,
            _ => return None,
        };
        Some(op)
    }

    pub fn target(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }

    pub fn value(&self) -> Option<Expr> {
        exprs(&self.0).nth(1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LambdaSignature {
    /// `(a, b)`, `(int a)`, `()`
    Explicit(ParameterList),
    /// `a`
    Implicit(Parameter),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LambdaBody {
    Expr(Expr),
    Block(Block),
}

impl LambdaExpr {
    pub fn signature(&self) -> Option<LambdaSignature> {
        let first = self.0.first_child()?;
        match first.kind() {
            SyntaxKind::ParameterList => ParameterList::cast(first).map(LambdaSignature::Explicit),
            SyntaxKind::Parameter => Parameter::cast(first).map(LambdaSignature::Implicit),
            _ => None,
        }
    }

    pub fn parameters(&self) -> Vec<Parameter> {
        match self.signature() {
            Some(LambdaSignature::Explicit(list)) => list.parameters().collect(),
            Some(LambdaSignature::Implicit(param)) => vec![param],
            None => Vec::new(),
        }
    }

    pub fn body(&self) -> Option<LambdaBody> {
        let last = self.0.last_child()?;
        if let Some(block) = Block::cast(last.clone()) {
            return Some(LambdaBody::Block(block));
        }
        Expr::cast(last).map(LambdaBody::Expr)
    }
}

impl AnonymousMethodExpr {
    pub fn parameters(&self) -> Option<ParameterList> {
        self.0.children().find_map(ParameterList::cast)
    }

    pub fn body(&self) -> Option<Block> {
        self.0.children().find_map(Block::cast)
    }
}

impl ParameterList {
    pub fn parameters(&self) -> impl Iterator<Item = Parameter> + '_ {
        self.0.children().filter_map(Parameter::cast)
    }
}

impl Parameter {
    pub fn name(&self) -> Option<SyntaxToken> {
        tokens(&self.0).filter(|t| t.kind() == SyntaxKind::Id).last()
    }

    pub fn ty(&self) -> Option<TypeRef> {
        self.0.children().find_map(TypeRef::cast)
    }

    pub fn modifier(&self) -> Option<SyntaxToken> {
        tokens(&self.0).find(|t| matches!(t.kind(), SyntaxKind::KwRef | SyntaxKind::KwOut))
    }
}

/// Contextual keywords lex as identifiers, so a clause's own keyword is its
/// first `Id` token and the variable it introduces is the second.
fn introduced_variable(node: &SyntaxNode) -> Option<SyntaxToken> {
    tokens(node).filter(|t| t.kind() == SyntaxKind::Id).nth(1)
}

impl QueryExpr {
    pub fn from_clause(&self) -> Option<FromClause> {
        self.0.children().find_map(FromClause::cast)
    }

    pub fn body(&self) -> Option<QueryBody> {
        self.0.children().find_map(QueryBody::cast)
    }
}

impl FromClause {
    pub fn variable(&self) -> Option<SyntaxToken> {
        introduced_variable(&self.0)
    }

    pub fn ty(&self) -> Option<TypeRef> {
        let ty = self.0.children().find_map(TypeRef::cast)?;
        // without a declared type the only child node is the source
        (self.0.children().count() > 1).then_some(ty)
    }

    pub fn source(&self) -> Option<Expr> {
        self.0.children().last().and_then(Expr::cast)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClauseKind {
    From,
    Let,
    Where,
    Join,
    JoinInto,
    OrderBy,
    Select,
    Group,
}

/// A clause between the leading `from` and the closing `select`/`group`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryClause {
    From(FromClause),
    Let(LetClause),
    Where(WhereClause),
    Join(JoinClause),
    JoinInto(JoinIntoClause),
    OrderBy(OrderByClause),
}

impl QueryClause {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::FromClause => FromClause::cast(node).map(QueryClause::From),
            SyntaxKind::LetClause => LetClause::cast(node).map(QueryClause::Let),
            SyntaxKind::WhereClause => WhereClause::cast(node).map(QueryClause::Where),
            SyntaxKind::JoinClause => JoinClause::cast(node).map(QueryClause::Join),
            SyntaxKind::JoinIntoClause => JoinIntoClause::cast(node).map(QueryClause::JoinInto),
            SyntaxKind::OrderByClause => OrderByClause::cast(node).map(QueryClause::OrderBy),
            _ => None,
        }
    }

    pub fn kind(&self) -> ClauseKind {
        match self {
            QueryClause::From(_) => ClauseKind::From,
            QueryClause::Let(_) => ClauseKind::Let,
            QueryClause::Where(_) => ClauseKind::Where,
            QueryClause::Join(_) => ClauseKind::Join,
            QueryClause::JoinInto(_) => ClauseKind::JoinInto,
            QueryClause::OrderBy(_) => ClauseKind::OrderBy,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SelectOrGroup {
    Select(SelectClause),
    Group(GroupClause),
}

impl SelectOrGroup {
    pub fn kind(&self) -> ClauseKind {
        match self {
            SelectOrGroup::Select(_) => ClauseKind::Select,
            SelectOrGroup::Group(_) => ClauseKind::Group,
        }
    }
}

impl QueryBody {
    pub fn clauses(&self) -> impl Iterator<Item = QueryClause> + '_ {
        self.0.children().filter_map(QueryClause::cast)
    }

    pub fn select_or_group(&self) -> Option<SelectOrGroup> {
        self.0.children().find_map(|node| match node.kind() {
            SyntaxKind::SelectClause => SelectClause::cast(node).map(SelectOrGroup::Select),
            SyntaxKind::GroupClause => GroupClause::cast(node).map(SelectOrGroup::Group),
            _ => None,
        })
    }

    pub fn continuation(&self) -> Option<QueryContinuation> {
        self.0.children().find_map(QueryContinuation::cast)
    }
}

impl LetClause {
    pub fn variable(&self) -> Option<SyntaxToken> {
        introduced_variable(&self.0)
    }

    pub fn value(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }
}

impl WhereClause {
    pub fn condition(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }
}

impl JoinClause {
    pub fn variable(&self) -> Option<SyntaxToken> {
        introduced_variable(&self.0)
    }
}

impl JoinIntoClause {
    pub fn variable(&self) -> Option<SyntaxToken> {
        introduced_variable(&self.0)
    }

    /// Group name after `into`.
    pub fn into_variable(&self) -> Option<SyntaxToken> {
        tokens(&self.0).filter(|t| t.kind() == SyntaxKind::Id).last()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderDirection {
    Ascending,
    Descending,
}

impl OrderByClause {
    pub fn orderings(&self) -> impl Iterator<Item = Ordering> + '_ {
        self.0.children().filter_map(Ordering::cast)
    }
}

impl Ordering {
    pub fn key(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }

    /// Ascending unless `descending` is written out.
    pub fn direction(&self) -> OrderDirection {
        match tokens(&self.0).last() {
            Some(t) if t.text() == "descending" => OrderDirection::Descending,
            _ => OrderDirection::Ascending,
        }
    }
}

impl SelectClause {
    pub fn value(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }
}

impl GroupClause {
    pub fn element(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }

    pub fn key(&self) -> Option<Expr> {
        exprs(&self.0).nth(1)
    }
}

impl QueryContinuation {
    pub fn variable(&self) -> Option<SyntaxToken> {
        introduced_variable(&self.0)
    }

    pub fn body(&self) -> Option<QueryBody> {
        self.0.children().find_map(QueryBody::cast)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Initializer {
    Object(ObjectInitializer),
    Collection(CollectionInitializer),
}

impl ObjectCreationExpr {
    pub fn ty(&self) -> Option<TypeRef> {
        self.0.children().find_map(TypeRef::cast)
    }

    pub fn arguments(&self) -> Option<ArgumentList> {
        self.0.children().find_map(ArgumentList::cast)
    }

    pub fn initializer(&self) -> Option<Initializer> {
        self.0.children().find_map(|node| match node.kind() {
            SyntaxKind::ObjectInitializer => ObjectInitializer::cast(node).map(Initializer::Object),
            SyntaxKind::CollectionInitializer => {
                CollectionInitializer::cast(node).map(Initializer::Collection)
            }
            _ => None,
        })
    }
}

impl ObjectInitializer {
    pub fn members(&self) -> impl Iterator<Item = MemberInitializer> + '_ {
        self.0.children().filter_map(MemberInitializer::cast)
    }
}

impl MemberInitializer {
    pub fn name(&self) -> Option<SyntaxToken> {
        token_of(&self.0, SyntaxKind::Id)
    }
}

impl CollectionInitializer {
    /// Element count, counting `{ a, b }` groups as one element each.
    pub fn len(&self) -> usize {
        self.0.children().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ArrayCreationExpr {
    pub fn ty(&self) -> Option<TypeRef> {
        self.0.children().find_map(TypeRef::cast)
    }

    /// Explicit dimension lengths: `5` and `n` in `new int[5, n]`.
    pub fn sizes(&self) -> impl Iterator<Item = Expr> + '_ {
        // `PredefinedType` is also an expression kind; skip the element type
        self.0.children().skip(1).filter_map(Expr::cast)
    }

    pub fn initializer(&self) -> Option<ArrayInitializer> {
        self.0.children().find_map(ArrayInitializer::cast)
    }
}

impl ImplicitArrayCreationExpr {
    pub fn initializer(&self) -> Option<ArrayInitializer> {
        self.0.children().find_map(ArrayInitializer::cast)
    }
}

impl ArrayInitializer {
    pub fn elements(&self) -> impl Iterator<Item = Expr> + '_ {
        exprs(&self.0)
    }
}

impl AnonymousObjectCreationExpr {
    pub fn declarators(&self) -> impl Iterator<Item = MemberDeclarator> + '_ {
        self.0.children().filter_map(MemberDeclarator::cast)
    }
}

impl MemberDeclarator {
    /// Explicit `Name =`, else the member name a projection like `c.Country`
    /// ends with.
    pub fn name(&self) -> Option<SyntaxToken> {
        if let Some(name) = token_of(&self.0, SyntaxKind::Id) {
            return Some(name);
        }
        match exprs(&self.0).next()? {
            Expr::SimpleName(name) => name.name(),
            Expr::MemberAccess(access) => access.member()?.name(),
            _ => None,
        }
    }

    pub fn value(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }
}
