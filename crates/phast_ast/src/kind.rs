//! Kind enum - every syntax-construct kind the parser can emit.
//!
//! Names follow the parser's `AST_*` kind names. The enumeration is closed on
//! the Rust side, but input is open: any name not listed here decodes to
//! [`Kind::Unknown`] instead of failing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::AstError;

/// The kind of a syntax node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
    // ========================================================================
    // Special nodes
    // ========================================================================
    MagicConst,
    Type,
    Name,
    ClosureVar,
    NullableType,
    TypeUnion,

    // ========================================================================
    // Declarations
    // ========================================================================
    FuncDecl,
    Closure,
    Method,
    ArrowFunc,
    Class,

    // ========================================================================
    // List nodes
    // ========================================================================
    ArgList,
    Array,
    EncapsList,
    ExprList,
    StmtList,
    If,
    SwitchList,
    CatchList,
    ParamList,
    ClosureUses,
    PropDecl,
    ConstDecl,
    ClassConstDecl,
    NameList,
    TraitAdaptations,
    Use,
    AttributeList,
    AttributeGroup,
    MatchArmList,

    // ========================================================================
    // Single-child nodes
    // ========================================================================
    Var,
    Const,
    Unpack,
    Cast,
    Empty,
    Isset,
    ShellExec,
    Clone,
    Exit,
    Print,
    IncludeOrEval,
    UnaryOp,
    PreInc,
    PreDec,
    PostInc,
    PostDec,
    YieldFrom,
    Global,
    Unset,
    Return,
    Label,
    Ref,
    HaltCompiler,
    Echo,
    Throw,
    Goto,
    Break,
    Continue,

    // ========================================================================
    // Two-child nodes
    // ========================================================================
    Dim,
    Prop,
    NullsafeProp,
    StaticProp,
    Call,
    ClassConst,
    Assign,
    AssignRef,
    AssignOp,
    BinaryOp,
    ArrayElem,
    New,
    Instanceof,
    Yield,
    Static,
    While,
    DoWhile,
    IfElem,
    Switch,
    SwitchCase,
    Declare,
    PropElem,
    ConstElem,
    UseTrait,
    TraitPrecedence,
    MethodReference,
    Namespace,
    UseElem,
    TraitAlias,
    GroupUse,
    Attribute,
    Match,
    MatchArm,
    NamedArg,

    // ========================================================================
    // Three-child nodes
    // ========================================================================
    MethodCall,
    NullsafeMethodCall,
    StaticCall,
    Conditional,
    Try,
    Catch,
    Param,

    // ========================================================================
    // Four-child nodes
    // ========================================================================
    For,
    Foreach,

    /// A kind name this enumeration does not list.
    Unknown,
}

impl Kind {
    /// Every named kind, in declaration order. Excludes [`Kind::Unknown`].
    pub const ALL: &'static [Kind] = &[
        Kind::MagicConst,
        Kind::Type,
        Kind::Name,
        Kind::ClosureVar,
        Kind::NullableType,
        Kind::TypeUnion,
        Kind::FuncDecl,
        Kind::Closure,
        Kind::Method,
        Kind::ArrowFunc,
        Kind::Class,
        Kind::ArgList,
        Kind::Array,
        Kind::EncapsList,
        Kind::ExprList,
        Kind::StmtList,
        Kind::If,
        Kind::SwitchList,
        Kind::CatchList,
        Kind::ParamList,
        Kind::ClosureUses,
        Kind::PropDecl,
        Kind::ConstDecl,
        Kind::ClassConstDecl,
        Kind::NameList,
        Kind::TraitAdaptations,
        Kind::Use,
        Kind::AttributeList,
        Kind::AttributeGroup,
        Kind::MatchArmList,
        Kind::Var,
        Kind::Const,
        Kind::Unpack,
        Kind::Cast,
        Kind::Empty,
        Kind::Isset,
        Kind::ShellExec,
        Kind::Clone,
        Kind::Exit,
        Kind::Print,
        Kind::IncludeOrEval,
        Kind::UnaryOp,
        Kind::PreInc,
        Kind::PreDec,
        Kind::PostInc,
        Kind::PostDec,
        Kind::YieldFrom,
        Kind::Global,
        Kind::Unset,
        Kind::Return,
        Kind::Label,
        Kind::Ref,
        Kind::HaltCompiler,
        Kind::Echo,
        Kind::Throw,
        Kind::Goto,
        Kind::Break,
        Kind::Continue,
        Kind::Dim,
        Kind::Prop,
        Kind::NullsafeProp,
        Kind::StaticProp,
        Kind::Call,
        Kind::ClassConst,
        Kind::Assign,
        Kind::AssignRef,
        Kind::AssignOp,
        Kind::BinaryOp,
        Kind::ArrayElem,
        Kind::New,
        Kind::Instanceof,
        Kind::Yield,
        Kind::Static,
        Kind::While,
        Kind::DoWhile,
        Kind::IfElem,
        Kind::Switch,
        Kind::SwitchCase,
        Kind::Declare,
        Kind::PropElem,
        Kind::ConstElem,
        Kind::UseTrait,
        Kind::TraitPrecedence,
        Kind::MethodReference,
        Kind::Namespace,
        Kind::UseElem,
        Kind::TraitAlias,
        Kind::GroupUse,
        Kind::Attribute,
        Kind::Match,
        Kind::MatchArm,
        Kind::NamedArg,
        Kind::MethodCall,
        Kind::NullsafeMethodCall,
        Kind::StaticCall,
        Kind::Conditional,
        Kind::Try,
        Kind::Catch,
        Kind::Param,
        Kind::For,
        Kind::Foreach,
    ];

    /// The canonical `AST_*` name of this kind.
    pub fn name(self) -> &'static str {
        match self {
            Kind::MagicConst => "AST_MAGIC_CONST",
            Kind::Type => "AST_TYPE",
            Kind::Name => "AST_NAME",
            Kind::ClosureVar => "AST_CLOSURE_VAR",
            Kind::NullableType => "AST_NULLABLE_TYPE",
            Kind::TypeUnion => "AST_TYPE_UNION",
            Kind::FuncDecl => "AST_FUNC_DECL",
            Kind::Closure => "AST_CLOSURE",
            Kind::Method => "AST_METHOD",
            Kind::ArrowFunc => "AST_ARROW_FUNC",
            Kind::Class => "AST_CLASS",
            Kind::ArgList => "AST_ARG_LIST",
            Kind::Array => "AST_ARRAY",
            Kind::EncapsList => "AST_ENCAPS_LIST",
            Kind::ExprList => "AST_EXPR_LIST",
            Kind::StmtList => "AST_STMT_LIST",
            Kind::If => "AST_IF",
            Kind::SwitchList => "AST_SWITCH_LIST",
            Kind::CatchList => "AST_CATCH_LIST",
            Kind::ParamList => "AST_PARAM_LIST",
            Kind::ClosureUses => "AST_CLOSURE_USES",
            Kind::PropDecl => "AST_PROP_DECL",
            Kind::ConstDecl => "AST_CONST_DECL",
            Kind::ClassConstDecl => "AST_CLASS_CONST_DECL",
            Kind::NameList => "AST_NAME_LIST",
            Kind::TraitAdaptations => "AST_TRAIT_ADAPTATIONS",
            Kind::Use => "AST_USE",
            Kind::AttributeList => "AST_ATTRIBUTE_LIST",
            Kind::AttributeGroup => "AST_ATTRIBUTE_GROUP",
            Kind::MatchArmList => "AST_MATCH_ARM_LIST",
            Kind::Var => "AST_VAR",
            Kind::Const => "AST_CONST",
            Kind::Unpack => "AST_UNPACK",
            Kind::Cast => "AST_CAST",
            Kind::Empty => "AST_EMPTY",
            Kind::Isset => "AST_ISSET",
            Kind::ShellExec => "AST_SHELL_EXEC",
            Kind::Clone => "AST_CLONE",
            Kind::Exit => "AST_EXIT",
            Kind::Print => "AST_PRINT",
            Kind::IncludeOrEval => "AST_INCLUDE_OR_EVAL",
            Kind::UnaryOp => "AST_UNARY_OP",
            Kind::PreInc => "AST_PRE_INC",
            Kind::PreDec => "AST_PRE_DEC",
            Kind::PostInc => "AST_POST_INC",
            Kind::PostDec => "AST_POST_DEC",
            Kind::YieldFrom => "AST_YIELD_FROM",
            Kind::Global => "AST_GLOBAL",
            Kind::Unset => "AST_UNSET",
            Kind::Return => "AST_RETURN",
            Kind::Label => "AST_LABEL",
            Kind::Ref => "AST_REF",
            Kind::HaltCompiler => "AST_HALT_COMPILER",
            Kind::Echo => "AST_ECHO",
            Kind::Throw => "AST_THROW",
            Kind::Goto => "AST_GOTO",
            Kind::Break => "AST_BREAK",
            Kind::Continue => "AST_CONTINUE",
            Kind::Dim => "AST_DIM",
            Kind::Prop => "AST_PROP",
            Kind::NullsafeProp => "AST_NULLSAFE_PROP",
            Kind::StaticProp => "AST_STATIC_PROP",
            Kind::Call => "AST_CALL",
            Kind::ClassConst => "AST_CLASS_CONST",
            Kind::Assign => "AST_ASSIGN",
            Kind::AssignRef => "AST_ASSIGN_REF",
            Kind::AssignOp => "AST_ASSIGN_OP",
            Kind::BinaryOp => "AST_BINARY_OP",
            Kind::ArrayElem => "AST_ARRAY_ELEM",
            Kind::New => "AST_NEW",
            Kind::Instanceof => "AST_INSTANCEOF",
            Kind::Yield => "AST_YIELD",
            Kind::Static => "AST_STATIC",
            Kind::While => "AST_WHILE",
            Kind::DoWhile => "AST_DO_WHILE",
            Kind::IfElem => "AST_IF_ELEM",
            Kind::Switch => "AST_SWITCH",
            Kind::SwitchCase => "AST_SWITCH_CASE",
            Kind::Declare => "AST_DECLARE",
            Kind::PropElem => "AST_PROP_ELEM",
            Kind::ConstElem => "AST_CONST_ELEM",
            Kind::UseTrait => "AST_USE_TRAIT",
            Kind::TraitPrecedence => "AST_TRAIT_PRECEDENCE",
            Kind::MethodReference => "AST_METHOD_REFERENCE",
            Kind::Namespace => "AST_NAMESPACE",
            Kind::UseElem => "AST_USE_ELEM",
            Kind::TraitAlias => "AST_TRAIT_ALIAS",
            Kind::GroupUse => "AST_GROUP_USE",
            Kind::Attribute => "AST_ATTRIBUTE",
            Kind::Match => "AST_MATCH",
            Kind::MatchArm => "AST_MATCH_ARM",
            Kind::NamedArg => "AST_NAMED_ARG",
            Kind::MethodCall => "AST_METHOD_CALL",
            Kind::NullsafeMethodCall => "AST_NULLSAFE_METHOD_CALL",
            Kind::StaticCall => "AST_STATIC_CALL",
            Kind::Conditional => "AST_CONDITIONAL",
            Kind::Try => "AST_TRY",
            Kind::Catch => "AST_CATCH",
            Kind::Param => "AST_PARAM",
            Kind::For => "AST_FOR",
            Kind::Foreach => "AST_FOREACH",
            Kind::Unknown => "AST_UNKNOWN",
        }
    }

    /// Look up a kind by its canonical name.
    pub fn from_name(name: &str) -> Option<Kind> {
        Kind::ALL.iter().copied().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Kind {
    type Err = AstError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Kind::from_name(s).ok_or_else(|| AstError::UnknownKind(s.to_string()))
    }
}

impl Serialize for Kind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Kind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Kind::from_name(&name).unwrap_or(Kind::Unknown))
    }
}
