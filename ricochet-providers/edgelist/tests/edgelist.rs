//! Integration tests for edge-list ingestion.
use std::io::{Cursor, Write};

use ricochet_core::{GraphError, GraphErrorCode};
use ricochet_providers_edgelist::{EdgeList, EdgeListError, EdgeListErrorCode};
use rstest::rstest;

#[rstest]
#[case("0 1\n1 2\n", &[(0, 1), (1, 2)], 3)]
#[case("# header\n\n  4\t7  \n", &[(4, 7)], 8)]
#[case("0 1\r\n1 0\r\n", &[(0, 1), (1, 0)], 2)]
#[case("5 5", &[(5, 5)], 6)]
fn try_from_reader_parses_pairs(
    #[case] raw: &str,
    #[case] expected: &[(usize, usize)],
    #[case] bound: usize,
) {
    let list = EdgeList::try_from_reader("demo", Cursor::new(raw)).expect("input is valid");
    assert_eq!(list.edges(), expected);
    assert_eq!(list.vertex_bound(), bound);
    assert_eq!(list.name(), "demo");
}

#[rstest]
#[case("")]
#[case("# only a comment\n\n")]
fn try_from_reader_rejects_empty_input(#[case] raw: &str) {
    let err = EdgeList::try_from_reader("demo", Cursor::new(raw)).expect_err("no edges");
    assert!(matches!(err, EdgeListError::EmptyInput));
    assert_eq!(err.code(), EdgeListErrorCode::EmptyInput);
    assert_eq!(err.code().to_string(), "EDGELIST_EMPTY_INPUT");
}

#[rstest]
#[case("0 1\n2\n", 2, "2")]
#[case("0 1\n\n1 x\n", 3, "1 x")]
#[case("-1 0\n", 1, "-1 0")]
#[case("# c\n0 1 2\n", 2, "0 1 2")]
fn try_from_reader_reports_malformed_lines(
    #[case] raw: &str,
    #[case] expected_line: usize,
    #[case] expected_content: &str,
) {
    let err = EdgeList::try_from_reader("demo", Cursor::new(raw)).expect_err("line is malformed");
    match err {
        EdgeListError::Malformed { line, content } => {
            assert_eq!(line, expected_line);
            assert_eq!(content, expected_content);
        }
        other => panic!("expected Malformed, got {other:?}"),
    }
}

#[rstest]
fn try_from_reader_propagates_io_error() {
    struct FailingReader;

    impl std::io::Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("boom"))
        }
    }

    impl std::io::BufRead for FailingReader {
        fn fill_buf(&mut self) -> std::io::Result<&[u8]> {
            Err(std::io::Error::other("boom"))
        }

        fn consume(&mut self, _amt: usize) {}
    }

    let err = EdgeList::try_from_reader("demo", FailingReader).expect_err("reader fails");
    assert!(matches!(err, EdgeListError::Io { .. }));
}

#[rstest]
fn into_graph_infers_size_and_collapses_duplicates() {
    let raw = "0 1\n1 0\n1 2\n2 2\n";
    let graph = EdgeList::try_from_reader("demo", Cursor::new(raw))
        .expect("input is valid")
        .into_graph(None)
        .expect("inferred size fits");
    assert_eq!(graph.len(), 3);
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.contains_edge(1, 0), Ok(true));
}

#[rstest]
fn into_graph_honours_larger_declared_size() {
    let graph = EdgeList::new("demo", vec![(0, 1)])
        .expect("edges are present")
        .into_graph(Some(10))
        .expect("size covers every endpoint");
    assert_eq!(graph.len(), 10);
    assert_eq!(graph.degree(9), Ok(0));
}

#[rstest]
fn into_graph_rejects_endpoint_beyond_declared_size() {
    let raw = "0 1\n# skip\n1 4\n";
    let err = EdgeList::try_from_reader("demo", Cursor::new(raw))
        .expect("input is valid")
        .into_graph(Some(3))
        .expect_err("vertex 4 exceeds size 3");
    assert!(matches!(
        err,
        EdgeListError::VertexOutOfRange {
            line: 3,
            vertex: 4,
            size: 3
        }
    ));
}

#[rstest]
fn into_graph_rejects_zero_size() {
    let err = EdgeList::new("demo", vec![(0, 0)])
        .expect("edges are present")
        .into_graph(Some(0))
        .expect_err("zero vertices");
    assert!(matches!(
        err,
        EdgeListError::Graph(GraphError::InvalidSize { got: 0 })
    ));
}

#[rstest]
#[case::left("0 1\n18446744073709551615 0\n", 2)]
#[case::right("# max id\n0 18446744073709551615\n", 2)]
fn try_from_reader_rejects_largest_possible_id(#[case] raw: &str, #[case] expected_line: usize) {
    let err = EdgeList::try_from_reader("huge", Cursor::new(raw))
        .expect_err("no vertex count covers usize::MAX");
    match err {
        EdgeListError::VertexIdOverflow { line, vertex } => {
            assert_eq!(line, expected_line);
            assert_eq!(vertex, usize::MAX);
        }
        other => panic!("expected VertexIdOverflow, got {other:?}"),
    }
}

#[rstest]
fn into_graph_reports_unallocatable_declared_size() {
    let err = EdgeList::new("demo", vec![(0, 1)])
        .expect("edges are present")
        .into_graph(Some(usize::MAX))
        .expect_err("adjacency for usize::MAX vertices cannot be allocated");
    assert!(matches!(
        err,
        EdgeListError::Graph(GraphError::CapacityExceeded { size: usize::MAX })
    ));
    assert_eq!(err.code(), EdgeListErrorCode::GraphFailure);
    assert_eq!(err.graph_code(), Some(GraphErrorCode::CapacityExceeded));
}

#[rstest]
fn open_reads_files_from_disk() -> anyhow::Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(file, "# triangle")?;
    writeln!(file, "0 1")?;
    writeln!(file, "1 2")?;
    writeln!(file, "2 0")?;
    file.flush()?;

    let list = EdgeList::open(file.path())?;
    assert_eq!(list.len(), 3);
    assert_eq!(list.name(), file.path().display().to_string());
    let graph = list.into_graph(None)?;
    assert_eq!(graph.edge_count(), 3);
    Ok(())
}

#[rstest]
fn open_reports_missing_files() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = EdgeList::open(dir.path().join("missing.txt")).expect_err("file is missing");
    assert_eq!(err.code(), EdgeListErrorCode::Io);
    assert_eq!(err.code().as_str(), "EDGELIST_IO");
}
