use crate::test_utils::{expect_cst, expect_no_match, expect_sexp};

#[test]
fn postfix_chain_in_any_order() {
    insta::assert_snapshot!(
        expect_sexp("expression", "a.b(c)[d]++"),
        @"(PostIncrementExpr (ElementAccess (InvocationExpr (MemberAccess a . b) (ArgumentList ( (Argument c) ))) (BracketedArgumentList [ (Argument d) ])) ++)"
    );
}

#[test]
fn invocation_then_member_access() {
    insta::assert_snapshot!(
        expect_sexp("expression", "a.b().c()"),
        @"(InvocationExpr (MemberAccess (InvocationExpr (MemberAccess a . b) (ArgumentList ( ))) . c) (ArgumentList ( )))"
    );
}

#[test]
fn member_access_cst() {
    insta::assert_snapshot!(expect_cst("expression", "a.b"), @r#"
    Root
      MemberAccess
        SimpleName
          Id "a"
        Dot "."
        SimpleName
          Id "b"
    "#);
}

#[test]
fn standalone_member_access() {
    insta::assert_snapshot!(
        expect_sexp("memberAccess", "a.b.c"),
        @"(MemberAccess (MemberAccess a . b) . c)"
    );
    expect_no_match("memberAccess", "a");
    expect_no_match("memberAccess", "a().b");
}

#[test]
fn standalone_invocation() {
    insta::assert_snapshot!(
        expect_sexp("invocationExpression", "a.b()"),
        @"(InvocationExpr (MemberAccess a . b) (ArgumentList ( )))"
    );
    insta::assert_snapshot!(
        expect_sexp("invocationExpression", "f(1)"),
        @"(InvocationExpr f (ArgumentList ( (Argument 1) )))"
    );
    // the chained form is only reachable through `primaryExpression`
    expect_no_match("invocationExpression", "a.b().c()");
}

#[test]
fn named_and_by_reference_arguments() {
    insta::assert_snapshot!(
        expect_sexp("expression", "f(x: 1, ref y, out z)"),
        @"(InvocationExpr f (ArgumentList ( (Argument x : 1) , (Argument ref y) , (Argument out z) )))"
    );
}

#[test]
fn generic_invocation() {
    insta::assert_snapshot!(
        expect_sexp("expression", "F<int>(x)"),
        @"(InvocationExpr (SimpleName F (TypeArgumentList < int >)) (ArgumentList ( (Argument x) )))"
    );
}

#[test]
fn angle_brackets_without_follower_are_comparisons() {
    insta::assert_snapshot!(
        expect_sexp("expression", "a < b > c"),
        @"(BinaryExpr (BinaryExpr a < b) > c)"
    );
    insta::assert_snapshot!(
        expect_sexp("expression", "F(a < b, c > d)"),
        @"(InvocationExpr F (ArgumentList ( (Argument (BinaryExpr a < b)) , (Argument (BinaryExpr c > d)) )))"
    );
}

#[test]
fn predefined_type_member() {
    insta::assert_snapshot!(
        expect_sexp("expression", "int.Parse(s)"),
        @"(InvocationExpr (MemberAccess int . Parse) (ArgumentList ( (Argument s) )))"
    );
}

#[test]
fn this_and_base() {
    insta::assert_snapshot!(
        expect_sexp("expression", "this.x"),
        @"(MemberAccess this . x)"
    );
    insta::assert_snapshot!(
        expect_sexp("expression", "base.M()"),
        @"(InvocationExpr (BaseAccess base . M) (ArgumentList ( )))"
    );
    insta::assert_snapshot!(
        expect_sexp("expression", "base[0]"),
        @"(BaseAccess base (BracketedArgumentList [ (Argument 0) ]))"
    );
}

#[test]
fn alias_qualified_name() {
    insta::assert_snapshot!(
        expect_sexp("expression", "global::System.Console"),
        @"(MemberAccess (QualifiedAliasMember global :: System) . Console)"
    );
}

#[test]
fn keyword_operators() {
    insta::assert_snapshot!(
        expect_sexp("expression", "typeof(int)"),
        @"(TypeofExpr typeof ( int ))"
    );
    insta::assert_snapshot!(
        expect_sexp("expression", "typeof(void)"),
        @"(TypeofExpr typeof ( void ))"
    );
    insta::assert_snapshot!(
        expect_sexp("expression", "typeof(List<>)"),
        @"(TypeofExpr typeof ( (UnboundTypeName List < >) ))"
    );
    insta::assert_snapshot!(
        expect_sexp("expression", "sizeof(int)"),
        @"(SizeofExpr sizeof ( int ))"
    );
    insta::assert_snapshot!(
        expect_sexp("expression", "default(T)"),
        @"(DefaultValueExpr default ( T ))"
    );
    insta::assert_snapshot!(
        expect_sexp("expression", "checked(a + b)"),
        @"(CheckedExpr checked ( (BinaryExpr a + b) ))"
    );
    insta::assert_snapshot!(
        expect_sexp("expression", "unchecked(x)"),
        @"(UncheckedExpr unchecked ( x ))"
    );
}

#[test]
fn literals() {
    insta::assert_snapshot!(
        expect_sexp("expression", r#"f(1, 2.5, 'c', "s", @"v", true, null)"#),
        @r#"(InvocationExpr f (ArgumentList ( (Argument 1) , (Argument 2.5) , (Argument 'c') , (Argument "s") , (Argument @"v") , (Argument true) , (Argument null) )))"#
    );
}

#[test]
fn element_access_needs_an_argument() {
    expect_no_match("expression", "a[]");
}
