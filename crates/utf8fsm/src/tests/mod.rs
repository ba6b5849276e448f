mod graph_snapshot;
