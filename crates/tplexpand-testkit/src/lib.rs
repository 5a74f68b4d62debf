//! Test utilities for tplexpand
//!
//! Sample sources shared by the library and binary test suites. Each
//! fixture pairs an input with the exact bytes the expander must produce.

/// A source file together with its expected expansion
#[derive(Debug, Clone, Copy)]
pub struct Fixture {
    pub input: &'static str,
    pub expected: &'static str,
}

/// One template expanded twice with different substitutions
pub const GREETING: Fixture = Fixture {
    input: "\
//{{ greet
hello NAME
//}}
start
//== greet NAME=world
//== greet NAME=moon
end
",
    expected: "\
start
hello world
hello moon
end
",
};

/// A template whose definition embeds an expansion of another template
pub const NESTED: Fixture = Fixture {
    input: "\
//{{ B
b=x
//}}
//{{ A
a begin
//== B x=1
a end
//}}
//== A
//== A 1=2
",
    expected: "\
a begin
b=1
a end
a begin
b=2
a end
",
};

/// Indented kernel source in the style the directives were made for
pub const KERNEL: Fixture = Fixture {
    input: "\
// Carry propagation kernels
//{{ CARRY
KERNEL(G_W) carry_T(global T *io, const global uint *bits) {
    T carry = 0;
    for (uint i = 0; i < NW; ++i) { io[i] = OP(io[i], &carry); }
}
//}}

  //== CARRY T=long, NW=4, OP=addCarry
  //== CARRY T=int,  NW=8, OP=subBorrow
",
    expected: "\
// Carry propagation kernels
KERNEL(G_W) carry_long(global long *io, const global uint *bits) {
long carry = 0;
for (uint i = 0; i < 4; ++i) { io[i] = addCarry(io[i], &carry); }
}
KERNEL(G_W) carry_int(global int *io, const global uint *bits) {
int carry = 0;
for (uint i = 0; i < 8; ++i) { io[i] = subBorrow(io[i], &carry); }
}
",
};

/// Plain text with no directives
pub const PLAIN: Fixture = Fixture {
    input: "\
fn main() {
    println!(\"{}\", 1);
}
",
    expected: "\
fn main() {
println!(\"{}\", 1);
}
",
};

/// Every fixture, for tests that hold for all of them
pub fn all() -> [(&'static str, Fixture); 4] {
    [
        ("greeting", GREETING),
        ("nested", NESTED),
        ("kernel", KERNEL),
        ("plain", PLAIN),
    ]
}
