/* ************************************************************************ **
** This file is part of numarr, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

/// Generate one item for every combination drawn from a list of groups.
///
/// A group is either a bracketed list of token trees (`[{i32} {u8}]`) or one
/// of the named scalar sets below.  The invocation ends with the definition
/// of a callback macro, which is called once per combination with one token
/// tree from each group, in order.
///
/// The named sets are what define the members of each sealed trait:
///
/// * `@{number}`: every primitive integer and float
/// * `@{signed}`: the floats and the signed integers
/// * `@{signed_int}`, `@{unsigned}`, `@{float}`
///
/// See the tests at the bottom of this file for usage.
macro_rules! gen_each {
    ($($arg:tt)*) => { gen_each__!{@groups [$($arg)*] []} };
}

/// implementation detail of `gen_each!`
macro_rules! gen_each__ {
    // named sets
    (@groups [@{number} $($rest:tt)*] [$($done:tt)*])
    => { gen_each__!{@groups [$($rest)*] [$($done)* [
        {f32} {f64}
        {i8} {i16} {i32} {i64} {isize}
        {u8} {u16} {u32} {u64} {usize}
    ]]}};

    (@groups [@{signed} $($rest:tt)*] [$($done:tt)*])
    => { gen_each__!{@groups [$($rest)*] [$($done)* [
        {f32} {f64}
        {i8} {i16} {i32} {i64} {isize}
    ]]}};

    (@groups [@{signed_int} $($rest:tt)*] [$($done:tt)*])
    => { gen_each__!{@groups [$($rest)*] [$($done)* [
        {i8} {i16} {i32} {i64} {isize}
    ]]}};

    (@groups [@{unsigned} $($rest:tt)*] [$($done:tt)*])
    => { gen_each__!{@groups [$($rest)*] [$($done)* [
        {u8} {u16} {u32} {u64} {usize}
    ]]}};

    (@groups [@{float} $($rest:tt)*] [$($done:tt)*])
    => { gen_each__!{@groups [$($rest)*] [$($done)* [{f32} {f64}]]}};

    // explicit group
    (@groups [[$($alt:tt)*] $($rest:tt)*] [$($done:tt)*])
    => { gen_each__!{@groups [$($rest)*] [$($done)* [$($alt)*]]}};

    // no groups left; what remains is the callback
    (@groups [$mac:ident!($($pat:tt)*) => {$($body:tt)*} $(;)*] [$($groups:tt)*])
    => {
        macro_rules! $mac {
            ($($pat)*) => {$($body)*};
        }
        gen_each__!{@product [$($groups)*] $mac []}
    };

    // Walk the groups left to right.  The remaining groups are kept
    // wrapped in a single token tree so that they can be repeated once
    // per alternative of the current group.
    (@product [] $mac:ident [$($args:tt)*])
    => { $mac!{$($args)*} };

    (@product [[$($alt:tt)*] $($rest:tt)*] $mac:ident $args:tt)
    => { gen_each__!{@spread [$($alt)*] [$($rest)*] $mac $args} };

    (@spread [$($alt:tt)*] $rest:tt $mac:ident $args:tt)
    => { $( gen_each__!{@push $alt $rest $mac $args} )* };

    (@push $alt:tt [$($rest:tt)*] $mac:ident [$($args:tt)*])
    => { gen_each__!{@product [$($rest)*] $mac [$($args)* $alt]} };
}

#[cfg(test)]
mod tests {
    trait Marker { }

    gen_each!{
        @{float}
        @{unsigned}
        [{1} {2}]
        mark!({$A:ty} {$B:ty} {$n:expr})
        => {
            impl Marker for ([$A; $n], $B) { }
        }
    }

    trait Single { }

    gen_each!{
        [{i32} {u32}]
        mark_single!({$T:ty}) => { impl Single for $T { } }
    }

    #[test]
    fn every_combination() {
        fn assert_marker<T: Marker>() {}
        assert_marker::<([f64; 2], u16)>();
        assert_marker::<([f32; 1], usize)>();
        assert_marker::<([f32; 2], u8)>();

        fn assert_single<T: Single>() {}
        assert_single::<i32>();
        assert_single::<u32>();
    }
}
