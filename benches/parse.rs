use criterion::*;

use cypher_front::{CollectingReporter, Parser};

fn parse_query(query: &str) {
    let mut reporter = CollectingReporter::new();
    let statement = Parser::new(query, &mut reporter).parse();
    black_box(statement.expect("valid query"));
}

fn bench_match_return(c: &mut Criterion) {
    let query = "MATCH (person:Person)-[:KNOWS]->(friend:Person) \
                  WHERE person.age > 25 AND friend.name STARTS WITH 'A' \
                  RETURN person.name, friend.name ORDER BY person.name SKIP 10 LIMIT 25";

    c.bench_function("match_return", move |b| b.iter(|| parse_query(query)));
}

fn bench_create_pattern(c: &mut Criterion) {
    let query = "CREATE (a:Person {name: 'Ann', age: 30})-[:KNOWS {since: 2020}]->(b:Person {name: 'Bob'})";

    c.bench_function("create_pattern", move |b| b.iter(|| parse_query(query)));
}

fn bench_nested_expression(c: &mut Criterion) {
    let query = "MATCH (n) WHERE (n.a + n.b) * n.c ^ 2 IN [1, 2, 3] AND NOT n.deleted \
                  RETURN CASE WHEN n.x > 0 THEN 'pos' ELSE 'neg' END";

    c.bench_function("nested_expression", move |b| b.iter(|| parse_query(query)));
}

criterion_group!(
    benches,
    bench_match_return,
    bench_create_pattern,
    bench_nested_expression
);
criterion_main!(benches);
