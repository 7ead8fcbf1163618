use sea_orm::{
    sea_query::{Expr, Func, SimpleExpr},
    ColumnTrait, EntityTrait,
};

/// Case-insensitive equality between a text column and `value`.
///
/// Both sides are folded by the database's `LOWER` so stored and requested spellings
/// are compared under the same rules. The column is qualified with its table so the
/// expression stays unambiguous in joins.
pub fn iequals<E, C>(entity: E, column: C, value: &str) -> SimpleExpr
where
    E: EntityTrait,
    C: ColumnTrait,
{
    Expr::expr(Func::lower(Expr::col((entity, column))))
        .eq(Func::lower(Expr::val(value.trim())))
}
