//! Scenario 9: the graph emitter's output is the one genuinely
//! bit-exact artifact this crate produces. A snapshot pins it so any
//! change to the table layout shows up as a reviewable diff instead of
//! silent drift.

use crate::emit_graph_string;

#[test]
fn default_graph_matches_snapshot() {
    let rendered = emit_graph_string();
    insta::assert_snapshot!(rendered, @r#"
    digraph utf8 {
      asc [label="0x01-0x7f"];
      lb2 [label="0xc2-0xdf"];
      lb3_e0 [label="0xe0-0xe0"];
      lb3 [label="0xe1-0xec,0xee-0xef"];
      lb3_ed [label="0xed-0xed"];
      lb4_f0 [label="0xf0-0xf0"];
      lb4 [label="0xf1-0xf3"];
      lb4_f4 [label="0xf4-0xf4"];
      cb3_f4 [label="0x80-0x8f"];
      cb3 [label="0x80-0xbf"];
      cb3_f0 [label="0x90-0xbf"];
      cb2_ed [label="0x80-0x9f"];
      cb2 [label="0x80-0xbf"];
      cb2_e0 [label="0xa0-0xbf"];
      cb1 [label="0x80-0xbf"];
      asc -> asc;
      asc -> lb2;
      asc -> lb3_e0;
      asc -> lb3;
      asc -> lb3_ed;
      asc -> lb4_f0;
      asc -> lb4;
      asc -> lb4_f4;
      lb2 -> cb1;
      lb3_e0 -> cb2_e0;
      lb3 -> cb2;
      lb3_ed -> cb2_ed;
      lb4_f0 -> cb3_f0;
      lb4 -> cb3;
      lb4_f4 -> cb3_f4;
      cb3_f4 -> cb2;
      cb3 -> cb2;
      cb3_f0 -> cb2;
      cb2_ed -> cb1;
      cb2 -> cb1;
      cb2_e0 -> cb1;
      cb1 -> asc;
      cb1 -> lb2;
      cb1 -> lb3_e0;
      cb1 -> lb3;
      cb1 -> lb3_ed;
      cb1 -> lb4_f0;
      cb1 -> lb4;
      cb1 -> lb4_f4;
    }
    "#);
}
