//! The fixed testbench skeleton and its named slots.

use crate::core::swap::{self, StrSwapTable};

pub const SLOT_ENTITY: &str = "entity";
pub const SLOT_TESTBENCH: &str = "testbench";
pub const SLOT_COMPONENT_PORTS: &str = "component_ports";
pub const SLOT_SIGNALS: &str = "signals";
pub const SLOT_HIGH_TIME: &str = "high_time";
pub const SLOT_LOW_TIME: &str = "low_time";
pub const SLOT_TEST_LENGTH: &str = "test_length";
pub const SLOT_SEGMENT_DURATION: &str = "segment_duration";
pub const SLOT_PORT_MAP: &str = "port_map";
pub const SLOT_STIMULUS: &str = "stimulus";

/// Indentation of the lines placed into the component's port clause and the
/// instance's port map.
pub const PORT_INDENT: usize = 12;
/// Indentation of architecture declarations.
pub const DECLARATION_INDENT: usize = 4;
/// Indentation of the stimulus statements.
pub const STIMULUS_INDENT: usize = 8;

pub const TESTBENCH: &str = r#"library ieee;
use ieee.std_logic_1164.all;

entity {{ testbench }} is
end entity {{ testbench }};

architecture behavioral of {{ testbench }} is
    -- component declaration
    component {{ entity }}
        port (
{{ component_ports }}
        );
    end component;

    -- signals
{{ signals }}

    -- configurable test parameters
    constant CLK_HIGH_TIME    : time := {{ high_time }} ns;
    constant CLK_LOW_TIME     : time := {{ low_time }} ns;
    constant TEST_LENGTH      : time := {{ test_length }} ns;
    constant DATA_CHANGE_TIME : time := {{ segment_duration }} ns;

begin
    -- instantiate the device under test
    uut: {{ entity }}
        port map (
{{ port_map }}
        );

    -- clock generation process
    clk_process: process
    begin
        while now < TEST_LENGTH loop
            clk <= '1';
            wait for CLK_HIGH_TIME;
            clk <= '0';
            wait for CLK_LOW_TIME;
        end loop;
        wait;
    end process;

    -- stimulus process
    stim_proc: process
    begin
        wait for 10 ns;

{{ stimulus }}

        wait for 20 ns;
        assert false report "Simulation complete." severity note;
        wait;
    end process;

end architecture behavioral;
"#;

/// Joins `lines` into a single slot value, indenting each line by `indent`
/// spaces and ending every line but the last with `sep`.
pub fn join_lines(lines: &[String], indent: usize, sep: &str) -> String {
    let prefix = " ".repeat(indent);
    lines
        .iter()
        .map(|l| format!("{}{}", prefix, l))
        .collect::<Vec<String>>()
        .join(&format!("{}\n", sep))
}

/// Places the slot values from `table` into the skeleton in a single pass.
pub fn fill(table: &StrSwapTable) -> String {
    swap::substitute(TESTBENCH, table)
}
