use crate::test_utils::{
    expect_no_match, expect_no_match_with, expect_sexp, expect_sexp_with, stubbed,
};

#[test]
fn rank_inferred_array() {
    insta::assert_snapshot!(
        expect_sexp("expression", "new[] { 0, 1, }"),
        @"(ImplicitArrayCreationExpr new (RankSpecifier [ ]) (ArrayInitializer { 0 , 1 , }))"
    );
}

#[test]
fn array_type_alone_is_not_a_creation() {
    let grammar = stubbed(&["arrayType"]);

    expect_no_match_with(&grammar, "arrayCreationExpression", "new ArrayType");
    expect_no_match_with(&grammar, "creationExpression", "new ArrayType");
    insta::assert_snapshot!(
        expect_sexp_with(&grammar, "arrayCreationExpression", "new ArrayType { 1 }"),
        @"(ArrayCreationExpr new ArrayType (ArrayInitializer { 1 }))"
    );
}

#[test]
fn sized_arrays() {
    insta::assert_snapshot!(
        expect_sexp("expression", "new int[5]"),
        @"(ArrayCreationExpr new int [ 5 ])"
    );
    insta::assert_snapshot!(
        expect_sexp("expression", "new int[2, n][]"),
        @"(ArrayCreationExpr new int [ 2 , n ] (RankSpecifier [ ]))"
    );
}

#[test]
fn array_initializers() {
    insta::assert_snapshot!(
        expect_sexp("expression", "new int[] { 1, 2 }"),
        @"(ArrayCreationExpr new (ArrayType int (RankSpecifier [ ])) (ArrayInitializer { 1 , 2 }))"
    );
    insta::assert_snapshot!(
        expect_sexp("expression", "new int[,] { { 1 }, { 2 } }"),
        @"(ArrayCreationExpr new (ArrayType int (RankSpecifier [ , ])) (ArrayInitializer { (ArrayInitializer { 1 }) , (ArrayInitializer { 2 }) }))"
    );
    expect_no_match("expression", "new int[]");
}

#[test]
fn object_creation() {
    insta::assert_snapshot!(
        expect_sexp("expression", "new Foo(1)"),
        @"(ObjectCreationExpr new Foo (ArgumentList ( (Argument 1) )))"
    );
    insta::assert_snapshot!(
        expect_sexp("expression", "new Foo() { X = 1, Y = { 2 } }"),
        @"(ObjectCreationExpr new Foo (ArgumentList ( )) (ObjectInitializer { (MemberInitializer X = 1) , (MemberInitializer Y = (CollectionInitializer { 2 })) }))"
    );
}

#[test]
fn collection_initializer_without_parens() {
    insta::assert_snapshot!(
        expect_sexp("expression", "new List<int> { 1, 2 }"),
        @"(ObjectCreationExpr new (NamedType List (TypeArgumentList < int >)) (CollectionInitializer { 1 , 2 }))"
    );
    insta::assert_snapshot!(
        expect_sexp("expression", r#"new Dictionary<string, int> { { "a", 1 } }"#),
        @r#"(ObjectCreationExpr new (NamedType Dictionary (TypeArgumentList < string , int >)) (CollectionInitializer { (ElementInitializer { "a" , 1 }) }))"#
    );
}

#[test]
fn object_initializer_requires_parens() {
    expect_no_match("expression", "new Foo { X = 1 }");
    expect_no_match("expression", "new Foo");
}

#[test]
fn anonymous_objects() {
    insta::assert_snapshot!(
        expect_sexp("expression", "new { Name = n, p.Age }"),
        @"(AnonymousObjectCreationExpr new { (MemberDeclarator Name = n) , (MemberDeclarator (MemberAccess p . Age)) })"
    );
    insta::assert_snapshot!(
        expect_sexp("expression", "new { }"),
        @"(AnonymousObjectCreationExpr new { })"
    );
}

#[test]
fn creation_takes_postfix_operators() {
    insta::assert_snapshot!(
        expect_sexp("expression", "new Foo().Bar"),
        @"(MemberAccess (ObjectCreationExpr new Foo (ArgumentList ( ))) . Bar)"
    );
}
