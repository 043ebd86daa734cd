use crate::test_utils::{expect_no_match, expect_sexp};

#[test]
fn explicit_signature_with_implicit_parameters() {
    insta::assert_snapshot!(
        expect_sexp("expression", "(x, y) => x + y"),
        @"(LambdaExpr (ParameterList ( (Parameter x) , (Parameter y) )) => (BinaryExpr x + y))"
    );
}

#[test]
fn implicit_signature() {
    insta::assert_snapshot!(
        expect_sexp("expression", "item => item.Name"),
        @"(LambdaExpr (Parameter item) => (MemberAccess item . Name))"
    );
}

#[test]
fn typed_parameters() {
    insta::assert_snapshot!(
        expect_sexp("expression", "(int a, ref string b) => a"),
        @"(LambdaExpr (ParameterList ( (Parameter int a) , (Parameter ref string b) )) => a)"
    );
}

#[test]
fn empty_parameter_list() {
    insta::assert_snapshot!(
        expect_sexp("expression", "() => 42"),
        @"(LambdaExpr (ParameterList ( )) => 42)"
    );
}

#[test]
fn block_body_keeps_statements_as_tokens() {
    insta::assert_snapshot!(
        expect_sexp("expression", "x => { return x; }"),
        @"(LambdaExpr (Parameter x) => (Block { return x ; }))"
    );
    insta::assert_snapshot!(
        expect_sexp("expression", "() => { if (a) { b(); } }"),
        @"(LambdaExpr (ParameterList ( )) => (Block { if ( a ) { b ( ) ; } }))"
    );
}

#[test]
fn curried_lambda() {
    insta::assert_snapshot!(
        expect_sexp("expression", "x => y => x + y"),
        @"(LambdaExpr (Parameter x) => (LambdaExpr (Parameter y) => (BinaryExpr x + y)))"
    );
}

#[test]
fn lambda_as_argument() {
    insta::assert_snapshot!(
        expect_sexp("expression", "list.Where(x => x > 0)"),
        @"(InvocationExpr (MemberAccess list . Where) (ArgumentList ( (Argument (LambdaExpr (Parameter x) => (BinaryExpr x > 0))) )))"
    );
}

#[test]
fn anonymous_methods() {
    insta::assert_snapshot!(
        expect_sexp("expression", "delegate (int x) { return x; }"),
        @"(AnonymousMethodExpr delegate (ParameterList ( (Parameter int x) )) (Block { return x ; }))"
    );
    insta::assert_snapshot!(
        expect_sexp("expression", "delegate { }"),
        @"(AnonymousMethodExpr delegate (Block { }))"
    );
}

#[test]
fn incomplete_lambdas_are_rejected() {
    expect_no_match("lambdaExpression", "");
    expect_no_match("lambdaExpression", "x =>");
    expect_no_match("lambdaExpression", "(x, y)");
    expect_no_match("expression", "x => { y");
}
